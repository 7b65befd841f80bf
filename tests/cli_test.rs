//! CLI command tests
//!
//! Commands run through `execute_command` against a wiremock analysis
//! service; record files live in temp directories.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use misinfo_dashboard::cli::{execute_command, AnalyzeInput, CliContext, Commands, DemoCommands};
use misinfo_dashboard::config::Config;
use misinfo_dashboard::notice::CONNECTION_FAILED;

fn context(base_url: &str) -> CliContext {
    let mut config = Config::default();
    config.backend.base_url = base_url.to_string();
    config.request.timeout_ms = 5000;
    CliContext::from_config(config).expect("Failed to create context")
}

fn advanced_response() -> Value {
    json!({
        "type": "text",
        "risk_score": 82,
        "confidence_score": 0.9,
        "red_flags": ["Urgent call to action"],
        "analysis": {
            "advanced": {
                "risk_assessment": {
                    "overall_risk_score": 82,
                    "risk_level": "HIGH RISK",
                    "component_scores": {"source": 20, "factual": 15}
                }
            }
        }
    })
}

#[cfg(test)]
mod render_command_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_render_record_file_to_stdout() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("response.json");
        std::fs::write(&file, advanced_response().to_string()).unwrap();

        let result = execute_command(
            Commands::Render {
                path: file,
                missing: vec!["timeline-section".to_string()],
                out: None,
            },
            &context("http://127.0.0.1:1"),
        )
        .await;

        assert_eq!(result.exit_code, 0, "{}", result.message);
        let output: Value = serde_json::from_str(&result.message).unwrap();
        let sections = output["sections"]["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 5);
        assert_eq!(sections[1]["section"], "temporal");
        assert_eq!(sections[1]["status"], "skipped");
        assert_eq!(sections[0]["primitives"][0]["data"]["filled"], 82.0);
    }

    #[tokio::test]
    async fn test_render_missing_accepts_section_names_and_rejects_typos() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("response.json");
        std::fs::write(&file, advanced_response().to_string()).unwrap();
        let ctx = context("http://127.0.0.1:1");

        let result = execute_command(
            Commands::Render {
                path: file.clone(),
                missing: vec!["timeline".to_string()],
                out: None,
            },
            &ctx,
        )
        .await;
        assert_eq!(result.exit_code, 0, "{}", result.message);
        let output: Value = serde_json::from_str(&result.message).unwrap();
        assert_eq!(output["sections"]["sections"][1]["status"], "skipped");

        let result = execute_command(
            Commands::Render {
                path: file,
                missing: vec!["timline".to_string()],
                out: None,
            },
            &ctx,
        )
        .await;
        assert_eq!(result.exit_code, 1);
        assert!(result.message.contains("Unknown render target 'timline'"));
        assert!(result.message.contains("timeline-section"));
    }

    #[tokio::test]
    async fn test_render_writes_out_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("record.json");
        let out = dir.path().join("view.json");
        std::fs::write(&file, r#"{"risk_assessment": {"overall_risk_score": 12}}"#).unwrap();

        let result = execute_command(
            Commands::Render {
                path: file,
                missing: vec![],
                out: Some(out.clone()),
            },
            &context("http://127.0.0.1:1"),
        )
        .await;

        assert_eq!(result.exit_code, 0, "{}", result.message);
        assert!(result.message.contains("view.json"));
        let written: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert!(written["summary"].is_object());
    }

    #[tokio::test]
    async fn test_render_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = execute_command(
            Commands::Render {
                path: dir.path().join("nope.json"),
                missing: vec![],
                out: None,
            },
            &context("http://127.0.0.1:1"),
        )
        .await;
        assert_eq!(result.exit_code, 1);
    }

    #[tokio::test]
    async fn test_render_malformed_json_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("bad.json");
        std::fs::write(&file, "{ not json").unwrap();

        let result = execute_command(
            Commands::Render {
                path: file,
                missing: vec![],
                out: None,
            },
            &context("http://127.0.0.1:1"),
        )
        .await;
        assert_eq!(result.exit_code, 1);
        assert!(result.message.contains("Malformed record JSON"));
    }
}

#[cfg(test)]
mod analyze_command_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_analyze_text_renders_sections() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze/text"))
            .respond_with(ResponseTemplate::new(200).set_body_json(advanced_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = execute_command(
            Commands::Analyze {
                input: AnalyzeInput::Text {
                    text: "Forward this to 20 friends now!".to_string(),
                },
                out: None,
            },
            &context(&mock_server.uri()),
        )
        .await;

        assert_eq!(result.exit_code, 0, "{}", result.message);
        let output: Value = serde_json::from_str(&result.message).unwrap();
        assert_eq!(output["sections"]["sections"].as_array().unwrap().len(), 5);
        assert_eq!(output["summary"]["red_flags"][0], "Urgent call to action");
    }

    #[tokio::test]
    async fn test_analyze_empty_text_never_calls_service() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(0)
            .mount(&mock_server)
            .await;

        let result = execute_command(
            Commands::Analyze {
                input: AnalyzeInput::Text {
                    text: "   ".to_string(),
                },
                out: None,
            },
            &context(&mock_server.uri()),
        )
        .await;

        assert_eq!(result.exit_code, 1);
        assert_eq!(result.message, "Please enter some text to analyze.");
    }

    #[tokio::test]
    async fn test_analyze_image_file() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze/image"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "type": "image",
                "risk_score": 30
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let dir = TempDir::new().unwrap();
        let image = dir.path().join("photo.png");
        std::fs::write(&image, b"\x89PNG\r\n\x1a\n").unwrap();

        let result = execute_command(
            Commands::Analyze {
                input: AnalyzeInput::Image {
                    path: image,
                    content_type: None,
                },
                out: None,
            },
            &context(&mock_server.uri()),
        )
        .await;

        assert_eq!(result.exit_code, 0, "{}", result.message);
        let output: Value = serde_json::from_str(&result.message).unwrap();
        assert!(output.get("sections").is_none());
    }

    #[tokio::test]
    async fn test_analyze_service_error_message() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze/url"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "Could not fetch URL"
            })))
            .mount(&mock_server)
            .await;

        let result = execute_command(
            Commands::Analyze {
                input: AnalyzeInput::Url {
                    url: "https://example.com/article".to_string(),
                },
                out: None,
            },
            &context(&mock_server.uri()),
        )
        .await;

        assert_eq!(result.exit_code, 1);
        assert_eq!(result.message, "Could not fetch URL");
    }
}

#[cfg(test)]
mod service_command_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_demo_run_against_service() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/analyze/text"))
            .respond_with(ResponseTemplate::new(200).set_body_json(advanced_response()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = execute_command(
            Commands::Demo {
                command: DemoCommands::Run {
                    id: "whatsapp_forward".to_string(),
                },
            },
            &context(&mock_server.uri()),
        )
        .await;

        assert_eq!(result.exit_code, 0, "{}", result.message);
        let run: Value = serde_json::from_str(&result.message).unwrap();
        assert_eq!(run["scenario_id"], "whatsapp_forward");
        assert_eq!(run["notices"][0]["message"], "Demo: WhatsApp Scam (Expected Risk: 90%)");
        assert!(run["view"].is_object());
    }

    #[tokio::test]
    async fn test_demo_run_with_service_down() {
        let result = execute_command(
            Commands::Demo {
                command: DemoCommands::Run {
                    id: "covid_myth".to_string(),
                },
            },
            &context("http://127.0.0.1:1"),
        )
        .await;

        assert_eq!(result.exit_code, 1);
        let run: Value = serde_json::from_str(&result.message).unwrap();
        assert_eq!(run["notices"][1]["message"], CONNECTION_FAILED);
        assert!(run.get("view").is_none());
    }

    #[tokio::test]
    async fn test_demo_run_unknown_id() {
        let result = execute_command(
            Commands::Demo {
                command: DemoCommands::Run {
                    id: "flat_earth".to_string(),
                },
            },
            &context("http://127.0.0.1:1"),
        )
        .await;
        assert_eq!(result.exit_code, 1);
        assert!(result.message.contains("flat_earth"));
    }

    #[tokio::test]
    async fn test_health_and_tips() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "healthy"})))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/educational/tips"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "general_tips": ["Check the date"],
                "red_flags": [],
                "verification_steps": ["Search for the original source"]
            })))
            .mount(&mock_server)
            .await;

        let ctx = context(&mock_server.uri());

        let health = execute_command(Commands::Health, &ctx).await;
        assert_eq!(health.exit_code, 0);
        assert_eq!(health.message, "Analysis service is healthy");

        let tips = execute_command(Commands::Tips, &ctx).await;
        assert_eq!(tips.exit_code, 0);
        assert!(tips.message.contains("General tips\n  - Check the date"));
        assert!(!tips.message.contains("Common red flags"));
        assert!(tips.message.contains("Verification steps"));
    }

    #[tokio::test]
    async fn test_unhealthy_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "degraded"})))
            .mount(&mock_server)
            .await;

        let result = execute_command(Commands::Health, &context(&mock_server.uri())).await;
        assert_eq!(result.exit_code, 1);
        assert!(result.message.contains("degraded"));
    }
}
