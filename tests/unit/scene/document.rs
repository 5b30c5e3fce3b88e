use super::*;

const FACADE: &str = r#"
{
  "root": {
    "tag": "wall-surface",
    "attrs": { "src": "brick.png", "width": "800", "height": "600" },
    "children": [
      {
        "tag": "framed-window",
        "attrs": { "background": "window.png", "frame": "frame.png", "width": "200", "height": "200" },
        "position": { "top": 100, "left": 200 }
      },
      {
        "tag": "scaled-column",
        "attrs": { "src": "column.png", "width": "80", "height": "300" },
        "position": { "bottom": 0, "right": 100 }
      },
      { "tag": "contained-object", "attrs": { "src": "logo.png" } }
    ]
  }
}
"#;

#[test]
fn parses_nested_document() {
    let doc = DocumentDef::from_json(FACADE).unwrap();
    assert_eq!(doc.root.tag, "wall-surface");
    assert_eq!(doc.root.attrs.get("width"), Some("800"));
    assert_eq!(doc.root.children.len(), 3);

    let window = &doc.root.children[0];
    assert_eq!(window.position, Some(Position::at(200, 100)));
    assert_eq!(window.attrs.get("frame"), Some("frame.png"));
    assert!(doc.root.children[2].position.is_none());
}

#[test]
fn builder_round_trips_through_json() {
    let doc = DocumentDef::new(
        ElementDef::new("wall-surface")
            .attr("src", "t.png")
            .child(ElementDef::new("scaled-column").at(Position::at(1, 2))),
    );
    let json = doc.to_json_pretty().unwrap();
    assert_eq!(DocumentDef::from_json(&json).unwrap(), doc);
}

#[test]
fn rejects_malformed_documents() {
    let err = DocumentDef::from_json(r#"{"root": {"attrs": {}}}"#).unwrap_err();
    assert!(err.to_string().contains("serialization error"));
    assert!(DocumentDef::from_json(r#"{"root": {"tag": "x", "style": "top: 1px"}}"#).is_err());
    assert!(DocumentDef::from_json(r#"{"root": {"tag": "x", "attrs": {"width": 5}}}"#).is_err());
}

#[test]
fn from_path_reports_missing_file() {
    let err = DocumentDef::from_path("target/definitely/missing.json").unwrap_err();
    assert!(err.to_string().contains("open facade document"));
}
