use serde::{Deserialize, Serialize};

/// Label shown next to a timer when the step does not name its own.
pub const DEFAULT_WAIT_LABEL: &str = "Wartezeit";

/// A single routine instruction.
///
/// Steps are built once per phase by the catalog and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub section: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, rename = "where", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Countdown length in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_seconds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wait_label: Option<String>,
}

impl Step {
    /// Seconds the step's countdown starts from, if it hosts one.
    ///
    /// A zero wait hosts no timer.
    pub fn timer_seconds(&self) -> Option<u32> {
        self.wait_seconds.filter(|&secs| secs > 0)
    }

    pub fn has_timer(&self) -> bool {
        self.timer_seconds().is_some()
    }

    pub fn wait_label(&self) -> &str {
        self.wait_label.as_deref().unwrap_or(DEFAULT_WAIT_LABEL)
    }
}

/// Static step content, materialized into a [`Step`] when a sequence is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepTemplate {
    pub id: &'static str,
    pub section: &'static str,
    pub title: &'static str,
    pub product: Option<&'static str>,
    pub location: Option<&'static str>,
    pub how: Option<&'static str>,
    pub note: Option<&'static str>,
    pub wait_seconds: Option<u32>,
    pub wait_label: Option<&'static str>,
}

impl StepTemplate {
    /// A template with only the mandatory fields set.
    pub const fn new(id: &'static str, section: &'static str, title: &'static str) -> Self {
        Self {
            id,
            section,
            title,
            product: None,
            location: None,
            how: None,
            note: None,
            wait_seconds: None,
            wait_label: None,
        }
    }

    pub const fn product(mut self, product: &'static str) -> Self {
        self.product = Some(product);
        self
    }

    pub const fn location(mut self, location: &'static str) -> Self {
        self.location = Some(location);
        self
    }

    pub const fn how(mut self, how: &'static str) -> Self {
        self.how = Some(how);
        self
    }

    pub const fn note(mut self, note: &'static str) -> Self {
        self.note = Some(note);
        self
    }

    pub const fn wait(mut self, seconds: u32) -> Self {
        self.wait_seconds = Some(seconds);
        self
    }

    pub const fn wait_label(mut self, label: &'static str) -> Self {
        self.wait_label = Some(label);
        self
    }

    pub fn to_step(&self) -> Step {
        Step {
            id: self.id.to_string(),
            section: self.section.to_string(),
            title: self.title.to_string(),
            product: self.product.map(str::to_string),
            location: self.location.map(str::to_string),
            how: self.how.map(str::to_string),
            note: self.note.map(str::to_string),
            wait_seconds: self.wait_seconds,
            wait_label: self.wait_label.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_label_falls_back_to_default() {
        let step = StepTemplate::new("eye", "Augen", "Eye Serum").wait(30).to_step();
        assert_eq!(step.wait_label(), DEFAULT_WAIT_LABEL);

        let labelled = StepTemplate::new("aftershave", "Rasur", "After Shave")
            .wait(300)
            .wait_label("Einziehen lassen (5 Min)")
            .to_step();
        assert_eq!(labelled.wait_label(), "Einziehen lassen (5 Min)");
    }

    #[test]
    fn zero_wait_hosts_no_timer() {
        let step = StepTemplate::new("x", "s", "t").wait(0).to_step();
        assert_eq!(step.wait_seconds, Some(0));
        assert!(!step.has_timer());
        assert_eq!(step.timer_seconds(), None);
    }

    #[test]
    fn json_uses_camel_case_and_omits_absent_fields() {
        let step = StepTemplate::new("shave", "Rasur", "Rasieren")
            .location("Seiten")
            .wait(300)
            .to_step();
        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["where"], "Seiten");
        assert_eq!(json["waitSeconds"], 300);
        assert!(json.get("product").is_none());
        assert!(json.get("waitLabel").is_none());
    }
}
