mod common;

use common::{run_vidguide, TestEnv};

#[test]
fn generate_subcommand_is_available() {
    let output = run_vidguide(&["generate", "--help"]);

    assert!(
        output.status.success(),
        "generate --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn generate_requires_a_youtube_api_key() {
    let output = run_vidguide(&["generate", "https://youtu.be/dQw4w9WgXcQ"]);

    assert!(
        !output.status.success(),
        "generate should fail without an API key\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("YouTube API key is missing"),
        "expected missing API key error, got:\n{}",
        stderr
    );
}

#[test]
fn generate_rejects_non_youtube_urls() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[youtube]
api_key = "test-api-key"

[llm]
api_token = "test-api-token"
"#,
    );

    let output = env.run(&["generate", "https://example.com/watch?v=abc"]);

    assert!(
        !output.status.success(),
        "generate should fail for a non-YouTube URL\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid YouTube URL"),
        "expected invalid URL error, got:\n{}",
        stderr
    );
}
