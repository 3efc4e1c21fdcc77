use serde::{Deserialize, Serialize};
use synkit_types::DisplayMethod;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    pub display_method: DisplayMethod,
}
