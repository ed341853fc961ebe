use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// Where clicked targets lead.
pub struct NavigationOptions {
    /// Hand documents to the platform opener instead of only logging them.
    #[schemars(title = "Open Externally")]
    pub open_externally: bool,
    /// Directory the `<name>_experience.html` documents live in. Relative
    /// to the working directory when unset.
    #[schemars(skip)]
    pub base_dir: Option<String>,
}
