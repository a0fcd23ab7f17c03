use hyperscript::{attrs, h};

#[test]
fn test_serialize_tree() {
    let node = h!(
        "p.lead#intro",
        attrs! { "title" => "t" },
        "Hi",
        h!("br#end").unwrap(),
    )
    .unwrap();
    let value = toml::Value::try_from(&node).unwrap();

    assert_eq!(value["tag"].as_str(), Some("p"));
    assert_eq!(value["classes"][0].as_str(), Some("lead"));
    assert_eq!(value["id"].as_str(), Some("intro"));
    assert_eq!(value["attrs"]["title"]["Text"].as_str(), Some("t"));
    assert_eq!(value["flags"].as_str(), Some("ESCAPE"));

    let children = value["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["Value"]["Text"].as_str(), Some("Hi"));
    let br = &children[1]["Node"];
    assert_eq!(br["tag"].as_str(), Some("br"));
    assert_eq!(br["flags"].as_str(), Some("VOID | ESCAPE"));
    assert_eq!(br["children"].as_array().map(Vec::len), Some(0));
}
