//! End-to-end tests: catalog JSON in, formatted Rust files out.

use std::fs;
use std::path::Path;

use methodgen_define::Catalog;
use methodgen_gen::{FsSink, GeneratorConfig, GeneratorError, MemorySink, generate, generate_and_write};
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {
        "name": "chat.postMessage",
        "json": "message",
        "return": "crate::objects::Message",
        "args": [
            { "name": "text", "type": "string" },
            { "name": "channel", "type": "string", "required": true,
              "comment": "Channel to send the message to." },
            { "name": "attachments", "type": "Vec<crate::objects::Attachment>" },
            { "name": "as_user", "type": "bool" },
            { "name": "markdown", "type": "bool", "query_name": "mrkdwn", "default": "true" }
        ]
    },
    {
        "name": "channels.history",
        "return": "crate::objects::History",
        "args": [
            { "name": "channel", "type": "string", "required": true },
            { "name": "count", "type": "int", "default": "100" }
        ]
    },
    { "name": "auth.test", "return": "crate::objects::Identity" },
    { "name": "chat.delete", "args": [
        { "name": "channel", "type": "string", "required": true },
        { "name": "ts", "type": "string", "required": true }
    ] },
    { "name": "users.profile.set", "json": "profile", "return": "crate::objects::Profile",
      "args": [ { "name": "profile", "type": "crate::objects::Profile" } ] },
    { "name": "oauth.access", "skip_token": true, "args": [
        { "name": "code", "type": "string", "required": true }
    ] },
    { "name": "im.open", "group": "IM", "json": "channel", "return": "crate::objects::Channel",
      "args": [ { "name": "user", "type": "string", "required": true } ] }
]"#;

fn catalog() -> Catalog {
    Catalog::from_json(CATALOG).unwrap()
}

#[test]
fn output_is_deterministic() {
    let config = GeneratorConfig::default();
    let first = generate(&catalog(), &config).unwrap();
    let second = generate(&catalog(), &config).unwrap();
    assert_eq!(first, second);

    let mut reversed = catalog();
    reversed.endpoints.reverse();
    for endpoint in &mut reversed.endpoints {
        endpoint.arguments.reverse();
    }
    assert_eq!(generate(&reversed, &config).unwrap(), first);
}

#[test]
fn file_set_follows_namespaces() {
    let output = generate(&catalog(), &GeneratorConfig::default()).unwrap();
    let names: Vec<_> = output.file_names().collect();
    assert_eq!(
        names,
        vec![
            "services.rs",
            "auth.rs",
            "channels.rs",
            "chat.rs",
            "im.rs",
            "oauth.rs",
            "users_profile.rs",
            "mod.rs",
        ]
    );
}

#[test]
fn services_file_lists_every_group() {
    let output = generate(&catalog(), &GeneratorConfig::default()).unwrap();
    let services = output.get("services.rs").unwrap();
    for service in [
        "AuthService",
        "ChannelsService",
        "ChatService",
        "IMService",
        "OauthService",
        "UsersProfileService",
    ] {
        assert!(
            services.contains(&format!("pub struct {service} {{")),
            "missing {service}"
        );
    }
}

#[test]
fn chat_unit_contains_both_calls_in_order() {
    let output = generate(&catalog(), &GeneratorConfig::default()).unwrap();
    let chat = output.get("chat.rs").unwrap();

    let delete = chat.find("pub struct ChatDeleteCall<'a>").unwrap();
    let post = chat.find("pub struct ChatPostMessageCall<'a>").unwrap();
    assert!(delete < post);

    assert!(chat.contains("pub fn delete("));
    assert!(chat.contains("pub fn post_message(&self, channel: impl Into<String>)"));
    assert!(chat.contains("/// Channel to send the message to."));
    assert!(chat.contains("/// Remote default: `true`."));
    assert!(chat.contains("values.set(\"mrkdwn\", \"true\");"));
}

#[test]
fn nested_namespace_gets_own_unit() {
    let output = generate(&catalog(), &GeneratorConfig::default()).unwrap();
    let profile = output.get("users_profile.rs").unwrap();
    assert!(profile.contains("pub struct UsersProfileSetCall<'a>"));
    assert!(profile.contains("impl super::services::UsersProfileService {"));
    assert!(profile.contains("pub fn set(&self) -> UsersProfileSetCall<'_>"));
    assert!(profile.contains("pub fn profile(mut self, profile: crate::objects::Profile) -> Self"));
}

#[test]
fn skip_token_endpoint_never_reads_token() {
    let output = generate(&catalog(), &GeneratorConfig::default()).unwrap();
    let oauth = output.get("oauth.rs").unwrap();
    assert!(!oauth.contains("self.service.token"));
    assert!(oauth.contains("values.set(\"code\", self.code.as_str());"));
}

#[test]
fn explicit_group_names_types() {
    let output = generate(&catalog(), &GeneratorConfig::default()).unwrap();
    let im = output.get("im.rs").unwrap();
    assert!(im.contains("pub struct IMOpenCall<'a>"));
    assert!(im.contains("service: &'a super::services::IMService,"));
}

#[test]
fn every_generated_file_parses() {
    let output = generate(&catalog(), &GeneratorConfig::default()).unwrap();
    for file in &output.files {
        assert!(
            syn::parse_file(&file.content).is_ok(),
            "{} does not parse",
            file.name
        );
    }
}

#[test]
fn regenerating_into_directory_is_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let config = GeneratorConfig::default();

    generate_and_write(&catalog(), &config, &mut FsSink::new(temp_dir.path())).unwrap();
    let first = read_dir_contents(temp_dir.path());

    generate_and_write(&catalog(), &config, &mut FsSink::new(temp_dir.path())).unwrap();
    let second = read_dir_contents(temp_dir.path());

    assert_eq!(first.len(), 8);
    assert_eq!(first, second);
}

#[test]
fn memory_and_filesystem_sinks_agree() {
    let temp_dir = TempDir::new().unwrap();
    let config = GeneratorConfig::default();

    let mut memory = MemorySink::new();
    generate_and_write(&catalog(), &config, &mut memory).unwrap();
    generate_and_write(&catalog(), &config, &mut FsSink::new(temp_dir.path())).unwrap();

    let written = read_dir_contents(temp_dir.path());
    let kept: Vec<_> = memory.files.into_iter().collect();
    assert_eq!(written, kept);
}

#[test]
fn invalid_catalog_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::from_json(
        r#"[{ "name": "chat.delete" }, { "name": "chat.delete" }]"#,
    )
    .unwrap();

    let result = generate_and_write(
        &catalog,
        &GeneratorConfig::default(),
        &mut FsSink::new(temp_dir.path()),
    );
    assert!(matches!(result, Err(GeneratorError::DuplicateEndpoint(_))));
    assert!(read_dir_contents(temp_dir.path()).is_empty());
}

#[test]
fn bundled_slack_catalog_generates() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../slack/endpoints.json");
    let catalog = Catalog::from_file(&path).unwrap();
    let output = generate(&catalog, &GeneratorConfig::default()).unwrap();

    assert!(output.get("chat.rs").unwrap().contains("pub struct ChatPostMessageCall<'a>"));
    assert!(output.get("users_profile.rs").is_some());
}

fn read_dir_contents(dir: &Path) -> Vec<(String, String)> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let entry = entry.unwrap();
            (
                entry.file_name().to_string_lossy().into_owned(),
                fs::read_to_string(entry.path()).unwrap(),
            )
        })
        .collect();
    files.sort();
    files
}
