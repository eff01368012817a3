use json_notation::{filter, FilterOptions, Mode};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct Policy {
    #[serde(default)]
    filter: FilterOptions,
    globs: Vec<String>,
}

#[test]
fn options_from_toml() {
    let opts: FilterOptions = toml::from_str(r#"mode = "strict""#).unwrap();
    assert_eq!(opts.mode, Mode::Strict);
    let opts: FilterOptions = toml::from_str("").unwrap();
    assert_eq!(opts.mode, Mode::Lenient);
    assert!(toml::from_str::<FilterOptions>(r#"mode = "loose""#).is_err());
}

#[test]
fn policy_drives_filter() {
    let policy: Policy = toml::from_str(
        r#"
globs = ["*", "!access", "access.clients"]

[filter]
mode = "restrictive"
"#,
    )
    .unwrap();
    assert_eq!(policy.filter, FilterOptions::strict());

    let doc = json!({"name": "n", "access": {"owner": "o", "clients": []}});
    let out = filter(&doc, &policy.globs, &policy.filter).unwrap();
    assert_eq!(out, json!({"name": "n"}));

    let out = filter(&doc, &policy.globs, &FilterOptions::lenient()).unwrap();
    assert_eq!(out, json!({"name": "n", "access": {"clients": []}}));
}

#[test]
fn options_from_json() {
    let opts: FilterOptions = serde_json::from_value(json!({"mode": "lenient"})).unwrap();
    assert_eq!(opts, FilterOptions::lenient());
}
