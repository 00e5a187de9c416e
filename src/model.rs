use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

/// A single open flow file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub path: String,
    pub xml: String,
    #[serde(default)]
    pub configuration: Value,
    #[serde(default)]
    pub saved: bool,
}

impl Document {
    pub fn new<P: Into<String>, X: Into<String>>(path: P, xml: X) -> Document {
        Document {
            path: path.into(),
            xml: xml.into(),
            configuration: Value::Object(Default::default()),
            saved: true,
        }
    }

    pub fn with_configuration(mut self, configuration: Value) -> Document {
        self.configuration = configuration;
        self
    }

    pub fn set_xml<X: Into<String>>(&mut self, xml: X) {
        self.xml = xml.into();
        self.saved = false;
    }

    pub fn set_path<P: Into<String>>(&mut self, path: P) {
        self.path = path.into();
        self.saved = false;
    }

    pub fn set_configuration(&mut self, configuration: Value) {
        self.configuration = configuration;
        self.saved = false;
    }
}

impl Default for Document {
    fn default() -> Document {
        Document::new("untitled", "")
    }
}

/// Frozen copy of a [`Document`]. Only the originator can turn it back into
/// live state.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    state: Document,
}

impl Snapshot {
    pub fn document(&self) -> &Document {
        &self.state
    }
}

/// Owner of the live document.
#[derive(Debug)]
pub struct Originator {
    state: Document,
}

impl Originator {
    pub fn new(initial: Document) -> Originator {
        Originator { state: initial }
    }

    pub fn save(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.set_state(&snapshot.state);
    }

    pub fn state(&self) -> &Document {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut Document {
        &mut self.state
    }

    // Copies field by field so the live document keeps its allocations.
    pub fn set_state(&mut self, file: &Document) {
        self.state.path.clone_from(&file.path);
        self.state.xml.clone_from(&file.xml);
        self.state.configuration.clone_from(&file.configuration);
        self.state.saved = file.saved;
    }

    pub fn into_state(self) -> Document {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck_macros::quickcheck;
    use serde_json::json;

    #[test]
    fn new_document_is_saved() {
        let doc = Document::new("flows/a.xml", "<a/>");

        assert!(doc.saved);
        assert_eq!(doc.configuration, json!({}));
    }

    #[test]
    fn edits_mark_dirty() {
        let mut doc = Document::new("a", "<a/>");
        doc.set_xml("<b/>");
        assert!(!doc.saved);

        let mut doc = Document::new("a", "<a/>");
        doc.set_configuration(json!({ "grid": true }));
        assert!(!doc.saved);
    }

    #[test]
    fn snapshot_is_detached_from_live_document() {
        let mut originator = Originator::new(Document::new("a", "<a/>"));
        let snapshot = originator.save();

        originator.state_mut().set_xml("<b/>");
        originator.state_mut().configuration = json!({ "zoom": 2 });

        assert_eq!(snapshot.document().xml, "<a/>");
        assert_eq!(snapshot.document().configuration, json!({}));
        assert!(snapshot.document().saved);
    }

    #[test]
    fn restore_copies_every_field() {
        let mut originator = Originator::new(
            Document::new("a", "<a/>").with_configuration(json!({ "theme": "dark" })),
        );
        let snapshot = originator.save();

        originator.state_mut().set_path("b");
        originator.state_mut().set_xml("<b/>");
        originator.state_mut().set_configuration(json!(null));

        originator.restore(&snapshot);
        assert_eq!(originator.state(), snapshot.document());
    }

    #[test]
    fn set_state_does_not_alias() {
        let mut originator = Originator::new(Document::default());
        let mut seed = Document::new("seed", "<seed/>");

        originator.set_state(&seed);
        seed.set_xml("<changed/>");

        assert_eq!(originator.state().xml, "<seed/>");
        assert_eq!(originator.state().path, "seed");
    }

    #[test]
    fn document_deserializes_with_defaults() {
        let doc: Document = serde_json::from_str(r#"{"path":"a","xml":"<a/>"}"#).unwrap();

        assert_eq!(doc.configuration, serde_json::Value::Null);
        assert!(!doc.saved);
    }

    #[quickcheck]
    fn test_save_restore(path: String, xml: String, edit: String) -> bool {
        let mut originator = Originator::new(Document::new(path, xml));
        let before = originator.state().clone();
        let snapshot = originator.save();

        originator.state_mut().set_xml(edit);
        originator.restore(&snapshot);

        *originator.state() == before
    }
}
