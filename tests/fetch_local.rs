// tests/fetch_local.rs
//
// DrawClient against a throwaway local HTTP server (no live site).
//
use encoding_rs::EUC_KR;
use lotto_scrape::config::options::AppOptions;
use lotto_scrape::error::FetchError;
use lotto_scrape::fetch::DrawClient;
use lotto_scrape::progress::Progress;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const PAGE: &str = include_str!("fixtures/draw_1197.html");

/// Routes on `drwNo`: 1197 → fixture (EUC-KR), 7 → invalid bytes,
/// 8 → page without markers, anything else → 404.
async fn serve() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        loop {
            let Ok((sock, _)) = listener.accept().await else { break };
            tokio::spawn(respond(sock));
        }
    });
    port
}

async fn respond(mut sock: TcpStream) {
    let mut req = Vec::new();
    let mut buf = [0u8; 1024];
    while !req.windows(4).any(|w| w == b"\r\n\r\n") {
        match sock.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => req.extend_from_slice(&buf[..n]),
        }
    }
    let head = String::from_utf8_lossy(&req);
    let round: u32 = head
        .split("drwNo=")
        .nth(1)
        .and_then(|rest| rest.split(|c: char| !c.is_ascii_digit()).next())
        .and_then(|n| n.parse().ok())
        .unwrap_or(0);

    let (status, body): (&str, Vec<u8>) = match round {
        1197 => ("200 OK", EUC_KR.encode(PAGE).0.into_owned()),
        7 => ("200 OK", vec![b'<', 0xFF, 0xFF, b'>']),
        8 => ("200 OK", b"<html><body>maintenance</body></html>".to_vec()),
        _ => ("404 Not Found", b"not found".to_vec()),
    };
    let header = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=euc-kr\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = sock.write_all(header.as_bytes()).await;
    let _ = sock.write_all(&body).await;
    let _ = sock.shutdown().await;
}

fn client(port: u16) -> DrawClient {
    let mut opts = AppOptions::default();
    opts.fetch.url_template = format!("http://127.0.0.1:{port}/gameResult.do?method=byWin&drwNo={{round}}");
    opts.fetch.use_system_proxy = false;
    opts.fetch.timeout_ms = 5_000;
    DrawClient::new(&opts).unwrap()
}

#[tokio::test]
async fn fetches_and_parses_euc_kr_page() {
    let c = client(serve().await);
    let draw = c.fetch(1197).await.unwrap();
    assert_eq!(draw.round, 1197);
    assert_eq!(draw.draw_date, "2025년 11월 15일");
    assert_eq!(draw.numbers, vec![1, 5, 7, 26, 28, 43]);
    assert_eq!(draw.bonus_number, 30);
    assert_eq!(draw.total_sales, "118,431,563,000");
}

#[tokio::test]
async fn each_failing_step_has_its_own_error() {
    let c = client(serve().await);

    let err = c.fetch(404).await.unwrap_err();
    assert!(matches!(err, FetchError::TransportFailure(_)), "{err:?}");

    let err = c.fetch(7).await.unwrap_err();
    assert!(matches!(err, FetchError::DecodingFailed { round: 7 }), "{err:?}");

    let err = c.fetch(8).await.unwrap_err();
    assert!(matches!(err, FetchError::ParsingFailed { round: 8 }), "{err:?}");

    let err = c.fetch(0).await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidRequest { round: 0, .. }), "{err:?}");
    assert!(err.user_message().starts_with("Could not fetch winning numbers:"));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_failure() {
    // bind then drop to get a port nobody listens on
    let port = {
        let l = TcpListener::bind("127.0.0.1:0").await.unwrap();
        l.local_addr().unwrap().port()
    };
    let err = client(port).fetch(1197).await.unwrap_err();
    assert!(matches!(err, FetchError::TransportFailure(_)), "{err:?}");
}

#[derive(Default)]
struct Tally {
    total: usize,
    ok: Vec<u32>,
    failed: Vec<u32>,
    finished: bool,
}

impl Progress for Tally {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn item_done(&mut self, round: u32) {
        self.ok.push(round);
    }
    fn item_failed(&mut self, round: u32, _reason: &str) {
        self.failed.push(round);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[tokio::test]
async fn fetch_many_keys_results_by_round() {
    let c = client(serve().await);
    let mut tally = Tally::default();
    let results = c.fetch_many(&[8, 1197, 1197, 7], Some(&mut tally)).await;

    assert_eq!(results.keys().copied().collect::<Vec<_>>(), vec![7, 8, 1197]);
    assert_eq!(results[&1197].as_ref().unwrap().round, 1197);
    assert!(matches!(results[&7], Err(FetchError::DecodingFailed { .. })));
    assert!(matches!(results[&8], Err(FetchError::ParsingFailed { .. })));

    assert_eq!(tally.total, 3);
    assert_eq!(tally.ok, vec![1197]);
    tally.failed.sort_unstable();
    assert_eq!(tally.failed, vec![7, 8]);
    assert!(tally.finished);
}
