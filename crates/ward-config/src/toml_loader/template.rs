//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Ward keyboard shortcuts
# Only override what you want to change -- missing sections use the built-in table.
schema_version = 1

[dispatch]
# prefix_timeout_ms = 2000   # 250-10000, how long "g" waits for its second key

[logging]
# level = "info"             # debug, info, warn, error

# Shortcut lists, one per context: global, encounter, patient, facility.
# Defining a list replaces the built-in list for that context.
#
# key          "k", "ctrl+k", "cmd+shift+p", "shift+1", or a prefix pair "g p"
# action       handler name the page registers
# description  text for the shortcuts help dialog
# when         condition over page flags (default "always"), e.g.
#              "canEdit && !readOnly", "questionnairesEnabled || canCreate"
# sub_context  only active while the page is in this exact sub-context
#
# [[shortcuts.global]]
# key = "ctrl+k"
# action = "open-command-palette"
# description = "Open command palette"
#
# [[shortcuts.global]]
# key = "g p"
# action = "goto-patients"
# description = "Go to patients"
#
# [[shortcuts.encounter]]
# key = "ctrl+enter"
# action = "submit-questionnaire"
# description = "Submit questionnaire"
# when = "questionnairesEnabled && !readOnly"
# sub_context = "questionnaire"
"##
}
