// Config parsing tests - defaults and inline documents

use mentor_core::animation::DecryptConfig;
use mentor_core::config::{AppConfig, ProviderConfig};
use std::time::Duration;

#[test]
fn empty_document_matches_defaults() {
    let config = AppConfig::from_toml_str("").expect("parse");

    assert_eq!(config.provider, ProviderConfig::default());
    assert_eq!(config.provider.api_key.as_deref(), Some("GOOGLE_API_KEY"));
    assert_eq!(config.chat.title, "PTSD mentor");
    assert_eq!(config.chat.prompt_prefix, "\n\nUser: ");
    assert_eq!(config.animation, DecryptConfig::default());
    assert_eq!(config.animation.tick_interval, Duration::from_millis(30));
    assert_eq!(config.animation.iterations_per_char, 2);
}

#[test]
fn default_headlines_are_staggered() {
    let config = AppConfig::default();

    let headlines: Vec<_> = config
        .headlines
        .iter()
        .map(|h| (h.text.as_str(), h.delay))
        .collect();
    assert_eq!(
        headlines,
        vec![
            ("Breaking Point", Duration::ZERO),
            ("ver 1.0", Duration::from_millis(250)),
        ]
    );
}

#[test]
fn explicit_empty_headline_list_is_kept() {
    let config = AppConfig::from_toml_str("headlines = []\n").expect("parse");
    assert!(config.headlines.is_empty());
}

#[test]
fn provider_id_defaults_to_lowercased_type() {
    let config = AppConfig::from_toml_str("[provider]\ntype = \"Google\"\n").expect("parse");

    assert_eq!(config.provider.id, "google");
    assert!(config.provider.is_gemini());
    assert_eq!(config.provider.api_key.as_deref(), Some("GOOGLE_API_KEY"));
}

#[test]
fn explicit_api_key_name_overrides_default() {
    let config = AppConfig::from_toml_str("[provider]\napi_key = \"OTHER_KEY\"\n").expect("parse");
    assert_eq!(config.provider.api_key.as_deref(), Some("OTHER_KEY"));
}

#[test]
fn headline_builds_matching_animation() {
    let config = AppConfig::default();
    let headline = &config.headlines[1];

    let animation = headline.to_decrypt(config.animation);

    assert_eq!(animation.text(), "ver 1.0");
}

#[test]
fn prompt_prefix_can_be_empty() {
    let config = AppConfig::from_toml_str("[chat]\nprompt_prefix = \"\"\n").expect("parse");
    assert_eq!(config.chat.prompt_prefix, "");
    assert_eq!(config.chat.title, "PTSD mentor");
}

#[test]
fn empty_provider_section_keeps_gemini_api_path() {
    let config = AppConfig::from_toml_str("[provider]\n").expect("parse");
    assert_eq!(config.provider.api_path.as_deref(), Some("v1beta/models"));
    assert_eq!(config.provider, ProviderConfig::default());
}

#[test]
fn ollama_type_without_endpoint_targets_local_server() {
    let config = AppConfig::from_toml_str("[provider]\ntype = \"ollama\"\n").expect("parse");

    assert!(config.provider.is_ollama());
    assert_eq!(config.provider.id, "ollama");
    assert_eq!(config.provider.endpoint, "http://127.0.0.1:11434");
    assert!(!config.provider.endpoint.contains("googleapis"));
    assert_eq!(config.provider.model, "llama3");
    assert!(config.provider.api_key.is_none());
    assert!(config.provider.api_path.is_none());
}

#[test]
fn ollama_overrides_are_kept() {
    let config = AppConfig::from_toml_str(
        "[provider]\ntype = \"LocalAI\"\nendpoint = \"http://gpu-box:8080\"\nmodel = \"mistral\"\n",
    )
    .expect("parse");

    assert_eq!(config.provider.id, "localai");
    assert_eq!(config.provider.endpoint, "http://gpu-box:8080");
    assert_eq!(config.provider.model, "mistral");
}
