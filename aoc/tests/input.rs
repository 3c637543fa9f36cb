use std::{
    fs,
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    sync::mpsc,
    thread,
};

use aoc::{input, Config, Error};

/// Answers exactly one request, and hands back the request head.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut head = String::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
            head.push_str(&line);
        }

        write!(
            stream,
            "{status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();

        tx.send(head).unwrap();
    });

    (format!("http://{addr}"), rx)
}

fn config(dir: &tempfile::TempDir, base_url: String) -> Config {
    Config {
        session: Some("s3cret".to_string()),
        input_dir: dir.path().to_path_buf(),
        base_url,
    }
}

#[test]
fn fetches_with_session_cookie_and_caches() {
    let dir = tempfile::tempdir().unwrap();
    let (base_url, head) = serve_once("HTTP/1.1 200 OK", "199\n200\n208\n");
    let config = config(&dir, base_url);

    let input = input::load(&config, 2021, 1).unwrap();
    assert_eq!(input, "199\n200\n208\n");

    let head = head.recv().unwrap().to_lowercase();
    assert!(head.starts_with("get /2021/day/1/input "), "{head}");
    assert!(head.contains("cookie: session=s3cret"), "{head}");

    let cached = input::cache_path(&config, 2021, 1);
    assert_eq!(fs::read_to_string(cached).unwrap(), "199\n200\n208\n");

    // second load never touches the network
    let offline = Config {
        session: None,
        base_url: "http://127.0.0.1:9".to_string(),
        ..config
    };
    assert_eq!(input::load(&offline, 2021, 1).unwrap(), "199\n200\n208\n");
}

#[test]
fn error_status_carries_response_body() {
    let dir = tempfile::tempdir().unwrap();
    let (base_url, _head) = serve_once(
        "HTTP/1.1 400 Bad Request",
        "Puzzle inputs differ by user.  Please log in to get your puzzle input.\n",
    );
    let config = config(&dir, base_url);

    match input::load(&config, 2021, 2) {
        Err(Error::Http { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.starts_with("Puzzle inputs differ by user."));
        }
        other => panic!("unexpected result: {other:?}"),
    }

    assert!(!input::cache_path(&config, 2021, 2).exists());
}

#[test]
fn cached_input_needs_no_session() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        session: None,
        input_dir: dir.path().to_path_buf(),
        ..Config::default()
    };

    let path = input::cache_path(&config, 2021, 6);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "3,4,3,1,2\n").unwrap();

    assert_eq!(input::load(&config, 2021, 6).unwrap(), "3,4,3,1,2\n");
}
