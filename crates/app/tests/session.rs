//! A login and the profile fetch that follows it share one client session.

use std::io;

use storefront_app::{
    api::ApiClient,
    auth::{AuthController, HttpAuthService, LoginForm, Route},
    config::{ApiConfig, Environment},
    profile::{HttpProfileService, ProfileCache, ProfileView},
};
use testresult::TestResult;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};

const SESSION_COOKIE: &str = "token=session-42";

const PROFILE_BODY: &str = r#"{"success":true,"data":{"user":{"_id":"u1","name":"Ada Lovelace","email":"ada@example.com"},"orders":[]}}"#;

/// Stand-in backend. Login sets the session cookie and the profile answers
/// 401 without it. One request per connection.
async fn serve(listener: TcpListener) -> io::Result<()> {
    loop {
        let (mut stream, _) = listener.accept().await?;
        let request = read_request(&mut stream).await?;

        stream.write_all(respond(&request).as_bytes()).await?;
        stream.shutdown().await?;
    }
}

async fn read_request(stream: &mut TcpStream) -> io::Result<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0_u8; 1024];

    loop {
        let read = stream.read(&mut chunk).await?;

        if read == 0 {
            break;
        }

        buffer.extend_from_slice(chunk.get(..read).unwrap_or_default());

        let text = String::from_utf8_lossy(&buffer);

        if let Some((head, body)) = text.split_once("\r\n\r\n")
            && body.len()
                >= header(head, "content-length")
                    .and_then(|value| value.parse().ok())
                    .unwrap_or(0)
        {
            break;
        }
    }

    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;

        key.trim().eq_ignore_ascii_case(name).then_some(value.trim())
    })
}

fn respond(request: &str) -> String {
    let request_line = request.lines().next().unwrap_or_default();
    let has_session =
        header(request, "cookie").is_some_and(|value| value.contains(SESSION_COOKIE));

    let (status, extra, body) = if request_line.starts_with("POST /api/auth/login ") {
        (
            "200 OK",
            format!("Set-Cookie: {SESSION_COOKIE}; Path=/; HttpOnly\r\n"),
            r#"{"success":true,"message":"Logged in"}"#,
        )
    } else if request_line.starts_with("GET /api/user/profile ") && has_session {
        ("200 OK", String::new(), PROFILE_BODY)
    } else if request_line.starts_with("GET /api/user/profile ") {
        ("401 Unauthorized", String::new(), r#"{"message":"Not authorized"}"#)
    } else {
        ("404 Not Found", String::new(), "{}")
    };

    format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n{extra}\r\n{body}",
        body.len()
    )
}

#[tokio::test]
async fn login_cookie_authenticates_profile_on_same_client() -> TestResult {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let config = ApiConfig {
        environment: Environment::Development,
        api_url: Some(format!("http://{}/api", listener.local_addr()?)),
    };

    let server = tokio::spawn(serve(listener));
    let client = ApiClient::new(&config)?;

    let mut auth = AuthController::new(HttpAuthService::new(client.clone()));
    let route = auth
        .login(&LoginForm {
            email: "ada@example.com".to_string(),
            password: "analytical".to_string(),
        })
        .await?;

    assert_eq!(route, Route::Home);

    let view = ProfileCache::new()
        .load(&HttpProfileService::new(client))
        .await;

    assert_eq!(
        view.profile().map(|profile| profile.user.name.as_str()),
        Some("Ada Lovelace")
    );

    let stranger = ApiClient::new(&config)?;

    assert_eq!(
        ProfileCache::new()
            .load(&HttpProfileService::new(stranger))
            .await,
        ProfileView::Unavailable
    );

    server.abort();

    Ok(())
}
