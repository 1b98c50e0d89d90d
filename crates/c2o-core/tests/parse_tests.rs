use c2o_core::collection::{self, UrlValue};

const PETSTORE: &str = include_str!("fixtures/petstore-collection.json");
const EDGE_CASES: &str = include_str!("fixtures/edge-cases.json");

#[test]
fn parse_petstore_collection() {
    let collection = collection::from_json(PETSTORE).expect("should parse petstore collection");

    let info = collection.info.as_ref().expect("should have info");
    assert_eq!(info.name.as_deref(), Some("Petstore"));
    assert_eq!(info.version.as_deref(), Some("2.1.0"));
    assert_eq!(collection.item.len(), 3);

    let pets = &collection.item[0];
    assert_eq!(pets.name.as_deref(), Some("Pets"));
    assert!(pets.request.is_none());
    assert_eq!(pets.item.len(), 4);

    let get_pet = &pets.item[1];
    let request = get_pet.request.as_ref().expect("should have request");
    assert_eq!(request.method.as_deref(), Some("GET"));
    let url = request.url.as_ref().expect("should have url");
    assert_eq!(url.path_segments(), vec!["pets", ":petId"]);
}

#[test]
fn parse_bare_string_url() {
    let collection = collection::from_json(PETSTORE).unwrap();
    let health = &collection.item[2];
    let request = health.request.as_ref().unwrap();
    match request.url.as_ref().unwrap() {
        UrlValue::Raw(raw) => assert_eq!(raw, "https://petstore.example.com/"),
        UrlValue::Url(_) => panic!("expected bare string url"),
    }
}

#[test]
fn parse_edge_cases() {
    let collection = collection::from_json(EDGE_CASES).expect("should parse edge cases");
    assert!(collection.info.is_none());

    // Node with both a request and children
    let mixed = &collection.item[2];
    assert!(mixed.request.is_some());
    assert_eq!(mixed.item.len(), 1);

    // Unrecognized body mode survives deserialization
    let strange = &collection.item[4];
    let body = strange.request.as_ref().unwrap().body.as_ref().unwrap();
    assert_eq!(body.mode.as_deref(), Some("graphql"));
}

#[test]
fn parse_empty_document() {
    let collection = collection::from_json("{}").expect("empty document should parse");
    assert!(collection.info.is_none());
    assert!(collection.item.is_empty());
}

#[test]
fn parse_yaml_collection() {
    let yaml = r#"
info:
  name: Minimal
item:
  - name: Ping
    request:
      method: GET
      url:
        path: [ping]
"#;
    let collection = collection::from_yaml(yaml).expect("should parse yaml");
    assert_eq!(
        collection.info.as_ref().unwrap().name.as_deref(),
        Some("Minimal")
    );
    assert_eq!(collection.item.len(), 1);
}

#[test]
fn parse_invalid_json() {
    assert!(collection::from_json("{oops").is_err());
}
