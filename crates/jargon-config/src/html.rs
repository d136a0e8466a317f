use serde::{Deserialize, Serialize};

fn default_raw_text_elements() -> Vec<String> {
    vec!["script".to_string(), "style".to_string()]
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct HtmlConfig {
    /// Elements whose text is passed through whole instead of tokenized
    #[serde(default = "default_raw_text_elements")]
    pub raw_text_elements: Vec<String>,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            raw_text_elements: default_raw_text_elements(),
        }
    }
}

impl HtmlConfig {
    pub fn is_raw_text_element(&self, name: &str) -> bool {
        self.raw_text_elements
            .iter()
            .any(|element| element.eq_ignore_ascii_case(name))
    }
}
