//=========================================================================
// Keysym Tables
//=========================================================================
//
// Static lookup from characters and host key codes to renderer keysyms.
//
// Resolution order: ASCII character table → key-code table → "None".
// Both tables are immutable constants; nothing is initialized at runtime.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::KeyCode;

/// Keysym reported when neither table knows the key.
pub const FALLBACK_KEYSYM: &str = "None";

//=== ASCII Table =========================================================

/// Keysyms indexed by ASCII code. Control characters other than tab have
/// no keysym.
pub const ASCII_KEYSYMS: [Option<&str>; 128] = [
    // 0x00
    None, None, None, None, None, None, None, None,
    None, Some("Tab"), None, None, None, None, None, None,
    // 0x10
    None, None, None, None, None, None, None, None,
    None, None, None, None, None, None, None, None,
    // 0x20
    Some("space"), Some("exclam"), Some("quotedbl"), Some("numbersign"),
    Some("dollar"), Some("percent"), Some("ampersand"), Some("quoteright"),
    Some("parenleft"), Some("parenright"), Some("asterisk"), Some("plus"),
    Some("comma"), Some("minus"), Some("period"), Some("slash"),
    // 0x30
    Some("0"), Some("1"), Some("2"), Some("3"),
    Some("4"), Some("5"), Some("6"), Some("7"),
    Some("8"), Some("9"), Some("colon"), Some("semicolon"),
    Some("less"), Some("equal"), Some("greater"), Some("question"),
    // 0x40
    Some("at"), Some("A"), Some("B"), Some("C"),
    Some("D"), Some("E"), Some("F"), Some("G"),
    Some("H"), Some("I"), Some("J"), Some("K"),
    Some("L"), Some("M"), Some("N"), Some("O"),
    // 0x50
    Some("P"), Some("Q"), Some("R"), Some("S"),
    Some("T"), Some("U"), Some("V"), Some("W"),
    Some("X"), Some("Y"), Some("Z"), Some("bracketleft"),
    Some("backslash"), Some("bracketright"), Some("asciicircum"), Some("underscore"),
    // 0x60
    Some("quoteleft"), Some("a"), Some("b"), Some("c"),
    Some("d"), Some("e"), Some("f"), Some("g"),
    Some("h"), Some("i"), Some("j"), Some("k"),
    Some("l"), Some("m"), Some("n"), Some("o"),
    // 0x70
    Some("p"), Some("q"), Some("r"), Some("s"),
    Some("t"), Some("u"), Some("v"), Some("w"),
    Some("x"), Some("y"), Some("z"), Some("braceleft"),
    Some("bar"), Some("braceright"), Some("asciitilde"), Some("Delete"),
];

/// Looks up the keysym for an ASCII character. Non-ASCII characters and
/// control characters without a keysym return `None`.
pub fn keysym_for_char(ch: char) -> Option<&'static str> {
    ASCII_KEYSYMS.get(ch as usize).copied().flatten()
}

//=== Key-Code Table ======================================================

/// Looks up the keysym for a host key code.
pub fn keysym_for_key(key: KeyCode) -> Option<&'static str> {
    use KeyCode::*;
    let sym = match key {
        //--- Editing & Control --------------------------------------------

        Backspace => "BackSpace",
        Tab | Backtab => "Tab",
        Return | Enter => "Return",
        Shift => "Shift_L",
        Control => "Control_L",
        Alt => "Alt_L",
        Pause => "Pause",
        CapsLock => "Caps_Lock",
        Escape => "Escape",
        Space => "space",
        End => "End",
        Home => "Home",
        ArrowLeft => "Left",
        ArrowUp => "Up",
        ArrowRight => "Right",
        ArrowDown => "Down",
        SysReq => "Snapshot",
        Insert => "Insert",
        Delete => "Delete",
        Help => "Help",
        NumLock => "Num_Lock",
        ScrollLock => "Scroll_Lock",

        //--- Digits -------------------------------------------------------

        Digit0 => "0", Digit1 => "1", Digit2 => "2", Digit3 => "3",
        Digit4 => "4", Digit5 => "5", Digit6 => "6", Digit7 => "7",
        Digit8 => "8", Digit9 => "9",

        //--- Letters (lower case, as the key carries no shift state) -------

        KeyA => "a", KeyB => "b", KeyC => "c", KeyD => "d", KeyE => "e",
        KeyF => "f", KeyG => "g", KeyH => "h", KeyI => "i", KeyJ => "j",
        KeyK => "k", KeyL => "l", KeyM => "m", KeyN => "n", KeyO => "o",
        KeyP => "p", KeyQ => "q", KeyR => "r", KeyS => "s", KeyT => "t",
        KeyU => "u", KeyV => "v", KeyW => "w", KeyX => "x", KeyY => "y",
        KeyZ => "z",

        //--- Punctuation --------------------------------------------------

        Asterisk => "asterisk",
        Plus => "plus",
        Minus => "minus",
        Period => "period",
        Slash => "slash",

        //--- Function Keys ------------------------------------------------

        F1 => "F1", F2 => "F2", F3 => "F3", F4 => "F4",
        F5 => "F5", F6 => "F6", F7 => "F7", F8 => "F8",
        F9 => "F9", F10 => "F10", F11 => "F11", F12 => "F12",
        F13 => "F13", F14 => "F14", F15 => "F15", F16 => "F16",
        F17 => "F17", F18 => "F18", F19 => "F19", F20 => "F20",
        F21 => "F21", F22 => "F22", F23 => "F23", F24 => "F24",

        Unidentified => return None,
    };
    Some(sym)
}

//=== Resolution ==========================================================

/// Resolves the character and keysym the renderer receives for a key
/// event.
///
/// The character is the first character of `text` when it is ASCII,
/// otherwise `'\0'`. Empty or non-ASCII text never fails; it falls
/// through to the key-code table and finally to `"None"`.
pub fn resolve(key: KeyCode, text: Option<&str>) -> (char, &'static str) {
    let first = text
        .and_then(|t| t.chars().next())
        .filter(|c| c.is_ascii());

    let key_char = first.unwrap_or('\0');
    let key_sym = first
        .and_then(keysym_for_char)
        .or_else(|| keysym_for_key(key))
        .unwrap_or(FALLBACK_KEYSYM);

    (key_char, key_sym)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_and_specials() {
        assert_eq!(keysym_for_char('a'), Some("a"));
        assert_eq!(keysym_for_char('A'), Some("A"));
        assert_eq!(keysym_for_char('@'), Some("at"));
        assert_eq!(keysym_for_char(' '), Some("space"));
        assert_eq!(keysym_for_char('~'), Some("asciitilde"));
        assert_eq!(keysym_for_char('\u{7f}'), Some("Delete"));
        assert_eq!(keysym_for_char('\t'), Some("Tab"));
    }

    #[test]
    fn printable_ascii_is_fully_covered() {
        for code in 32u8..=126 {
            assert!(
                keysym_for_char(code as char).is_some(),
                "missing keysym for ASCII {}",
                code
            );
        }
    }

    #[test]
    fn control_chars_and_non_ascii_have_no_char_keysym() {
        assert_eq!(keysym_for_char('\0'), None);
        assert_eq!(keysym_for_char('\r'), None);
        assert_eq!(keysym_for_char('é'), None);
    }

    #[test]
    fn key_code_table() {
        assert_eq!(keysym_for_key(KeyCode::Return), Some("Return"));
        assert_eq!(keysym_for_key(KeyCode::Enter), Some("Return"));
        assert_eq!(keysym_for_key(KeyCode::Backtab), Some("Tab"));
        assert_eq!(keysym_for_key(KeyCode::SysReq), Some("Snapshot"));
        assert_eq!(keysym_for_key(KeyCode::KeyQ), Some("q"));
        assert_eq!(keysym_for_key(KeyCode::F24), Some("F24"));
        assert_eq!(keysym_for_key(KeyCode::Unidentified), None);
    }

    #[test]
    fn character_table_wins_over_key_code() {
        // Shift+A reports key A with text "A"
        assert_eq!(resolve(KeyCode::KeyA, Some("A")), ('A', "A"));
    }

    #[test]
    fn key_code_used_when_text_is_empty() {
        assert_eq!(resolve(KeyCode::ArrowUp, Some("")), ('\0', "Up"));
        assert_eq!(resolve(KeyCode::Shift, None), ('\0', "Shift_L"));
    }

    #[test]
    fn control_text_falls_through_to_key_code() {
        // Enter produces "\r", which has no character keysym
        assert_eq!(resolve(KeyCode::Return, Some("\r")), ('\r', "Return"));
    }

    #[test]
    fn non_ascii_text_yields_null_char() {
        assert_eq!(resolve(KeyCode::Unidentified, Some("é")), ('\0', "None"));
    }

    #[test]
    fn unknown_everything_falls_back_to_none() {
        assert_eq!(resolve(KeyCode::Unidentified, None), ('\0', FALLBACK_KEYSYM));
    }
}
