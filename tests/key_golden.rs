mod fixture;

use codearea::{parse_input_events, Event};

fn describe(event: &Event) -> String {
    match event {
        Event::Key(key) => key.to_string(),
        Event::PasteSetting(true) => "paste-start".to_string(),
        Event::PasteSetting(false) => "paste-end".to_string(),
    }
}

#[test]
fn key_vectors_match_fixture() {
    let raw = fixture::read_fixture("key_vectors.tsv");
    for (idx, line) in raw.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = line.split('\t').collect();
        assert!(
            parts.len() == 2,
            "line {line_num}: expected 2 columns, got {}",
            parts.len()
        );
        let input = fixture::unescape(parts[0]);
        let expected: Vec<String> = match parts[1] {
            "-" => Vec::new(),
            events => fixture::unescape(events)
                .split(' ')
                .map(|event| event.to_string())
                .collect(),
        };
        let actual: Vec<String> = parse_input_events(&input).iter().map(describe).collect();
        assert_eq!(
            actual, expected,
            "line {line_num}: parse_input_events({input:?}) mismatch"
        );
    }
}
