//! Input events delivered to widgets, and a decoder for raw terminal input.

use crate::core::input::{Key, KeyCode, Mods};

/// Input event delivered to widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key(Key),
    /// Bracketed paste boundary: `true` at the start, `false` at the end.
    PasteSetting(bool),
}

impl From<Key> for Event {
    fn from(key: Key) -> Self {
        Event::Key(key)
    }
}

const PASTE_START: &str = "\x1b[200~";
const PASTE_END: &str = "\x1b[201~";

/// Decodes a chunk of raw terminal input.
///
/// Pasted text is delivered between `PasteSetting(true)` and `PasteSetting(false)` as
/// plain character keys. Unrecognized escape sequences are dropped.
pub fn parse_input_events(data: &str) -> Vec<Event> {
    let mut events = Vec::new();
    let mut remaining = data;
    loop {
        let Some(start) = remaining.find(PASTE_START) else {
            parse_keys(remaining, &mut events);
            break;
        };
        parse_keys(&remaining[..start], &mut events);

        let after_start = &remaining[start + PASTE_START.len()..];
        events.push(Event::PasteSetting(true));
        match after_start.find(PASTE_END) {
            Some(end) => {
                push_pasted(&after_start[..end], &mut events);
                events.push(Event::PasteSetting(false));
                remaining = &after_start[end + PASTE_END.len()..];
            }
            None => {
                // The end marker arrives in a later chunk.
                push_pasted(after_start, &mut events);
                break;
            }
        }
    }
    events
}

fn push_pasted(text: &str, events: &mut Vec<Event>) {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    events.extend(normalized.chars().map(|ch| match ch {
        '\n' => Event::Key(Key::plain(KeyCode::Enter)),
        '\t' => Event::Key(Key::plain(KeyCode::Tab)),
        ch => Event::Key(Key::char(ch)),
    }));
}

fn parse_keys(data: &str, events: &mut Vec<Event>) {
    let mut rest = data;
    while let Some(ch) = rest.chars().next() {
        if rest.starts_with(PASTE_END) {
            events.push(Event::PasteSetting(false));
            rest = &rest[PASTE_END.len()..];
            continue;
        }
        if ch == '\x1b' {
            let (key, used) = parse_escape(rest);
            if let Some(key) = key {
                events.push(Event::Key(key));
            }
            rest = &rest[used..];
            continue;
        }
        rest = &rest[ch.len_utf8()..];
        events.push(Event::Key(control_key(ch)));
    }
}

fn control_key(ch: char) -> Key {
    match ch {
        '\r' | '\n' => Key::plain(KeyCode::Enter),
        '\t' => Key::plain(KeyCode::Tab),
        '\x7f' | '\x08' => Key::plain(KeyCode::Backspace),
        '\x01'..='\x1a' => {
            let letter = char::from(ch as u8 - 1 + b'a');
            Key::new(KeyCode::Char(letter), Mods::CTRL)
        }
        ch => Key::char(ch),
    }
}

/// Parses an escape sequence at the start of `data`, returning the key and bytes consumed.
fn parse_escape(data: &str) -> (Option<Key>, usize) {
    let bytes = data.as_bytes();
    let Some(&introducer) = bytes.get(1) else {
        return (Some(Key::plain(KeyCode::Escape)), 1);
    };

    match introducer {
        b'[' => {
            let mut end = 2;
            while end < bytes.len() && !(0x40..=0x7e).contains(&bytes[end]) {
                end += 1;
            }
            if end >= bytes.len() {
                return (None, bytes.len());
            }
            let params = &data[2..end];
            (csi_key(params, bytes[end]), end + 1)
        }
        b'O' => {
            let Some(&final_byte) = bytes.get(2) else {
                return (None, bytes.len());
            };
            (ss3_key(final_byte), 3)
        }
        b'\x1b' => (Some(Key::plain(KeyCode::Escape)), 1),
        _ => {
            let Some(ch) = data[1..].chars().next() else {
                return (Some(Key::plain(KeyCode::Escape)), 1);
            };
            let mut key = control_key(ch);
            key.mods = key.mods | Mods::ALT;
            (Some(key), 1 + ch.len_utf8())
        }
    }
}

fn csi_key(params: &str, final_byte: u8) -> Option<Key> {
    let mut parts = params.split(';');
    let first = parts.next().unwrap_or("");
    let mods = parts
        .next()
        .and_then(|value| value.parse::<u8>().ok())
        .map(xterm_mods)
        .unwrap_or(Mods::NONE);

    let code = match final_byte {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        b'Z' => return Some(Key::new(KeyCode::Tab, Mods::SHIFT)),
        b'~' => match first {
            "1" | "7" => KeyCode::Home,
            "2" => KeyCode::Insert,
            "3" => KeyCode::Delete,
            "4" | "8" => KeyCode::End,
            "5" => KeyCode::PageUp,
            "6" => KeyCode::PageDown,
            "11" => KeyCode::F(1),
            "12" => KeyCode::F(2),
            "13" => KeyCode::F(3),
            "14" => KeyCode::F(4),
            _ => return None,
        },
        _ => return None,
    };
    Some(Key::new(code, mods))
}

fn ss3_key(final_byte: u8) -> Option<Key> {
    let code = match final_byte {
        b'A' => KeyCode::Up,
        b'B' => KeyCode::Down,
        b'C' => KeyCode::Right,
        b'D' => KeyCode::Left,
        b'H' => KeyCode::Home,
        b'F' => KeyCode::End,
        b'P' => KeyCode::F(1),
        b'Q' => KeyCode::F(2),
        b'R' => KeyCode::F(3),
        b'S' => KeyCode::F(4),
        _ => return None,
    };
    Some(Key::plain(code))
}

/// Decodes the xterm modifier parameter (`1 + bits`).
fn xterm_mods(param: u8) -> Mods {
    let bits = param.saturating_sub(1);
    let mut mods = Mods::NONE;
    if bits & 1 != 0 {
        mods = mods | Mods::SHIFT;
    }
    if bits & 2 != 0 {
        mods = mods | Mods::ALT;
    }
    if bits & 4 != 0 {
        mods = mods | Mods::CTRL;
    }
    mods
}
