//! Parse configuration.

use serde::{Deserialize, Serialize};

/// Options controlling case folding.
///
/// All fields are independently optional. In XML mode names keep their case
/// unless folding is requested explicitly.
///
/// Deserializes from camelCase JSON:
/// `{"xmlMode": true, "lowerCaseTags": true}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Fold tag names to lowercase. Defaults to `!xml_mode`.
    pub lower_case_tags: Option<bool>,
    /// Fold attribute names to lowercase. Defaults to `!xml_mode`.
    pub lower_case_attribute_names: Option<bool>,
    /// Changes the defaults of the two options above to `false`.
    pub xml_mode: bool,
}

impl ParseOptions {
    /// Options for XML documents: names keep their case.
    #[must_use]
    pub const fn xml() -> Self {
        Self {
            lower_case_tags: None,
            lower_case_attribute_names: None,
            xml_mode: true,
        }
    }

    /// Override tag-name folding.
    #[must_use]
    pub const fn with_lower_case_tags(mut self, fold: bool) -> Self {
        self.lower_case_tags = Some(fold);
        self
    }

    /// Override attribute-name folding.
    #[must_use]
    pub const fn with_lower_case_attribute_names(mut self, fold: bool) -> Self {
        self.lower_case_attribute_names = Some(fold);
        self
    }

    /// Whether tag names are folded to lowercase.
    #[must_use]
    pub const fn folds_tags(&self) -> bool {
        match self.lower_case_tags {
            Some(fold) => fold,
            None => !self.xml_mode,
        }
    }

    /// Whether attribute names are folded to lowercase.
    #[must_use]
    pub const fn folds_attribute_names(&self) -> bool {
        match self.lower_case_attribute_names {
            Some(fold) => fold,
            None => !self.xml_mode,
        }
    }
}
