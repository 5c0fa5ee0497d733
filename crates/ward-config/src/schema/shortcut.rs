//! Shortcut table types.
//!
//! The table is author-maintained: one ordered list of definitions per UI
//! context. Key and condition strings stay raw here; `validation` checks
//! them at load time and `ward-input` compiles them.

use serde::{Deserialize, Serialize};

/// A named UI scope that selects which shortcut definitions apply on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutContext {
    Global,
    Encounter,
    Patient,
    Facility,
}

impl ShortcutContext {
    pub const ALL: [ShortcutContext; 4] = [
        ShortcutContext::Global,
        ShortcutContext::Encounter,
        ShortcutContext::Patient,
        ShortcutContext::Facility,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShortcutContext::Global => "global",
            ShortcutContext::Encounter => "encounter",
            ShortcutContext::Patient => "patient",
            ShortcutContext::Facility => "facility",
        }
    }
}

impl std::str::FromStr for ShortcutContext {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ctx| ctx.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown shortcut context: {s}"))
    }
}

fn always() -> String {
    "always".into()
}

/// One shortcut as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutDef {
    /// `"k"`, `"ctrl+k"`, or a two-key prefix sequence like `"g p"`.
    pub key: String,
    /// Handler name invoked when the shortcut fires.
    pub action: String,
    #[serde(default)]
    pub description: String,
    /// Condition expression over named flags, e.g. `"canEdit && !readOnly"`.
    #[serde(default = "always")]
    pub when: String,
    /// Restricts the shortcut to an exactly matching active sub-context.
    #[serde(default, alias = "subContext", skip_serializing_if = "Option::is_none")]
    pub sub_context: Option<String>,
}

impl ShortcutDef {
    pub fn new(key: &str, action: &str, description: &str) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
            description: description.into(),
            when: always(),
            sub_context: None,
        }
    }

    pub fn when(mut self, condition: &str) -> Self {
        self.when = condition.into();
        self
    }

    pub fn in_sub_context(mut self, sub_context: &str) -> Self {
        self.sub_context = Some(sub_context.into());
        self
    }
}

/// Shortcut definitions for every context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutTable {
    pub global: Vec<ShortcutDef>,
    pub encounter: Vec<ShortcutDef>,
    pub patient: Vec<ShortcutDef>,
    pub facility: Vec<ShortcutDef>,
}

impl ShortcutTable {
    /// Definitions for one context, in file order.
    pub fn for_context(&self, context: ShortcutContext) -> &[ShortcutDef] {
        match context {
            ShortcutContext::Global => &self.global,
            ShortcutContext::Encounter => &self.encounter,
            ShortcutContext::Patient => &self.patient,
            ShortcutContext::Facility => &self.facility,
        }
    }

    /// Total number of definitions across all contexts.
    pub fn len(&self) -> usize {
        ShortcutContext::ALL
            .iter()
            .map(|ctx| self.for_context(*ctx).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ShortcutTable {
    fn default() -> Self {
        Self {
            global: vec![
                ShortcutDef::new("ctrl+k", "open-command-palette", "Open command palette"),
                ShortcutDef::new("meta+k", "open-command-palette", "Open command palette"),
                ShortcutDef::new("shift+?", "show-shortcuts", "Show keyboard shortcuts"),
                ShortcutDef::new("g h", "goto-home", "Go to home"),
                ShortcutDef::new("g f", "goto-facilities", "Go to facilities"),
                ShortcutDef::new("g p", "goto-patients", "Go to patients"),
            ],
            encounter: vec![
                ShortcutDef::new("ctrl+shift+e", "edit-encounter", "Edit encounter")
                    .when("canEdit && !readOnly"),
                ShortcutDef::new("g q", "goto-questionnaires", "Go to questionnaires")
                    .when("questionnairesEnabled"),
                ShortcutDef::new("shift+1", "goto-updates-tab", "Show updates tab"),
                ShortcutDef::new("shift+2", "goto-plots-tab", "Show plots tab"),
                ShortcutDef::new("ctrl+enter", "submit-questionnaire", "Submit questionnaire")
                    .when("questionnairesEnabled && !readOnly")
                    .in_sub_context("questionnaire"),
                ShortcutDef::new("escape", "cancel-questionnaire", "Cancel questionnaire")
                    .in_sub_context("questionnaire"),
            ],
            patient: vec![
                ShortcutDef::new("ctrl+shift+n", "new-encounter", "Start a new encounter")
                    .when("canCreate"),
                ShortcutDef::new("e", "edit-patient", "Edit patient details")
                    .when("canEdit && !readOnly"),
                ShortcutDef::new("g e", "goto-encounters", "Go to encounters"),
            ],
            facility: vec![
                ShortcutDef::new("g i", "goto-inventory", "Go to inventory"),
                ShortcutDef::new("g s", "goto-schedule", "Go to schedule"),
                ShortcutDef::new("ctrl+shift+u", "goto-users", "Manage facility users")
                    .when("canEdit"),
            ],
        }
    }
}
