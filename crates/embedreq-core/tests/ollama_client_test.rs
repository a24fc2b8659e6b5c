use embedreq_config::{OllamaConfig, OutputFormat};
use embedreq_core::{default_documents, Embedder, EmbeddingRequester, OllamaClient};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Serves the given (status line, body) replies to consecutive connections
/// and hands back the raw requests it received.
async fn fake_ollama(replies: Vec<(&'static str, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut requests = Vec::new();
        for (status, body) in replies {
            let (mut stream, _) = listener.accept().await.unwrap();
            requests.push(read_request(&mut stream).await);
            let reply = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(reply.as_bytes()).await.unwrap();
            stream.shutdown().await.ok();
        }
        requests
    });

    (base_url, handle)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let body_len = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .map(|v| v.trim().parse::<usize>().unwrap())
                .unwrap_or(0);
            if buf.len() >= end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8(buf).unwrap()
}

fn request_body(raw: &str) -> serde_json::Value {
    let (_, body) = raw.split_once("\r\n\r\n").unwrap();
    serde_json::from_str(body).unwrap()
}

fn config_for(base_url: &str) -> OllamaConfig {
    OllamaConfig {
        base_url: base_url.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn embed_posts_model_and_input() {
    let reply = r#"{"model":"mxbai-embed-large","embeddings":[[0.1,0.2,0.3]],"total_duration":1200,"load_duration":300,"prompt_eval_count":5,"done":true}"#;
    let (base_url, server) = fake_ollama(vec![("200 OK", reply.to_string())]).await;

    let client = OllamaClient::new(&config_for(&base_url), "mxbai-embed-large").unwrap();
    let resp = client.embed("the sky is red").await.unwrap();

    assert_eq!(resp.model, "mxbai-embed-large");
    assert_eq!(resp.embeddings, vec![vec![0.1, 0.2, 0.3]]);
    assert_eq!(resp.prompt_eval_count, Some(5));
    assert_eq!(resp.extra.get("done"), Some(&serde_json::json!(true)));

    let requests = server.await.unwrap();
    assert!(requests[0].starts_with("POST /api/embed "));
    assert_eq!(
        request_body(&requests[0]),
        serde_json::json!({"model": "mxbai-embed-large", "input": "the sky is red"})
    );
}

#[tokio::test]
async fn truncate_is_forwarded_when_configured() {
    let reply = r#"{"model":"m","embeddings":[[1.0]]}"#;
    let (base_url, server) = fake_ollama(vec![("200 OK", reply.to_string())]).await;

    let config = OllamaConfig {
        truncate: Some(true),
        ..config_for(&base_url)
    };
    let client = OllamaClient::new(&config, "m").unwrap();
    client.embed("x").await.unwrap();

    let requests = server.await.unwrap();
    assert_eq!(request_body(&requests[0])["truncate"], serde_json::json!(true));
}

#[tokio::test]
async fn server_error_surfaces_status_and_body() {
    let reply = r#"{"error":"model \"nope\" not found, try pulling it first"}"#;
    let (base_url, server) = fake_ollama(vec![("404 Not Found", reply.to_string())]).await;

    let client = OllamaClient::new(&config_for(&base_url), "nope").unwrap();
    let err = client.embed("x").await.unwrap_err().to_string();
    assert!(err.contains("404"), "{err}");
    assert!(err.contains("not found"), "{err}");
    server.await.unwrap();
}

#[tokio::test]
async fn unreachable_server_is_an_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = OllamaClient::new(&config_for(&base_url), "mxbai-embed-large").unwrap();
    let err = client.embed("x").await.unwrap_err();
    assert!(err.to_string().contains("failed to reach Ollama"));
}

#[tokio::test]
async fn configured_timeout_cuts_off_silent_server() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let silent = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
        drop(stream);
    });

    let config = OllamaConfig {
        timeout_secs: Some(1),
        ..config_for(&base_url)
    };
    let client = OllamaClient::new(&config, "mxbai-embed-large").unwrap();
    assert!(client.embed("x").await.is_err());
    silent.abort();
}

#[tokio::test]
async fn list_models_reads_tags() {
    let reply = r#"{"models":[{"name":"mxbai-embed-large:latest","model":"mxbai-embed-large:latest","size":669615493,"digest":"468836162de7"},{"name":"llama3:8b"}]}"#;
    let (base_url, server) = fake_ollama(vec![("200 OK", reply.to_string())]).await;

    let client = OllamaClient::new(&config_for(&base_url), "mxbai-embed-large").unwrap();
    let models = client.list_models().await.unwrap();
    let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["mxbai-embed-large:latest", "llama3:8b"]);

    let requests = server.await.unwrap();
    assert!(requests[0].starts_with("GET /api/tags "));
}

#[tokio::test]
async fn full_run_against_server_prints_three_pairs() {
    let reply = r#"{"model":"mxbai-embed-large","embeddings":[[0.1,0.2,0.3]]}"#.to_string();
    let (base_url, server) = fake_ollama(vec![
        ("200 OK", reply.clone()),
        ("200 OK", reply.clone()),
        ("200 OK", reply),
    ])
    .await;

    let client = OllamaClient::new(&config_for(&base_url), "mxbai-embed-large").unwrap();
    let requester = EmbeddingRequester::new(Arc::new(client), OutputFormat::Text);
    let docs = default_documents();

    let mut out = Vec::new();
    let summary = requester.run(&docs, &mut out).await.unwrap();
    assert_eq!(summary.embedded, 3);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("embeddings=[[0.1, 0.2, 0.3]]").count(), 3);

    let requests = server.await.unwrap();
    let inputs: Vec<String> = requests
        .iter()
        .map(|r| request_body(r)["input"].as_str().unwrap().to_string())
        .collect();
    let expected: Vec<String> = docs.into_iter().map(|d| d.text).collect();
    assert_eq!(inputs, expected);
}
