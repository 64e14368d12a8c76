use std::io::{self, Write};

use keyguard_firmware::ui::{
    KeypadKey, KeypadView, MnemonicEntryView, PinView, RevealView, ViewContent,
};

/// Print a text rendition of `view`.
pub fn render<W: Write + ?Sized>(view: &ViewContent, out: &mut W) -> io::Result<()> {
    match view {
        ViewContent::Pin(view) => render_pin(view, out),
        ViewContent::RecoverMnemonic(view) => render_recover(view, out),
        ViewContent::RevealMnemonic(view) => render_reveal(view, out),
    }
}

fn render_pin<W: Write + ?Sized>(view: &PinView, out: &mut W) -> io::Result<()> {
    writeln!(out, "== {} ==", view.title)?;
    if let Some(note) = &view.note {
        writeln!(out, "{note}")?;
    }
    if let Some(words) = &view.anti_phishing {
        writeln!(out, "anti-phishing: {words}")?;
    }
    writeln!(out, "pin: {}", "*".repeat(view.masked_digits))?;
    render_keypad(&view.keypad, out)
}

fn render_keypad<W: Write + ?Sized>(keypad: &KeypadView, out: &mut W) -> io::Result<()> {
    for row in &keypad.rows {
        let cells: Vec<String> = row.iter().map(|key| format!("[{:^5}]", key_name(*key))).collect();
        writeln!(out, "{}", cells.join(" "))?;
    }
    Ok(())
}

/// Terminal friendly name; the toolkit captions are icon font glyphs.
fn key_name(key: KeypadKey) -> String {
    match key {
        KeypadKey::Digit(digit) => digit.to_string(),
        KeypadKey::Reset => String::from("reset"),
        KeypadKey::Confirm => String::from("ok"),
    }
}

fn render_recover<W: Write + ?Sized>(view: &MnemonicEntryView, out: &mut W) -> io::Result<()> {
    writeln!(out, "== {} ==", view.title)?;
    for (index, word) in view.words.iter().enumerate() {
        writeln!(out, "{:>2}. {word}", index + 1)?;
    }
    let next = if view.next_word_enabled { "next" } else { "----" };
    let done = if view.done_enabled { "done" } else { "----" };
    writeln!(out, "actions: back del [{next}] [{done}]")
}

fn render_reveal<W: Write + ?Sized>(view: &RevealView, out: &mut W) -> io::Result<()> {
    writeln!(out, "== {} ==", view.title)?;
    if let Some(note) = &view.note {
        writeln!(out, "{note}")?;
    }
    for (index, word) in view.words.iter().enumerate() {
        writeln!(out, "{:>2}. {word}", index + 1)?;
    }
    let toggle = if view.long_phrase { "12 words" } else { "24 words" };
    writeln!(out, "actions: back continue [use {toggle}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyguard_firmware::ui::ButtonStyles;
    use zeroize::Zeroizing;

    #[test]
    fn pin_view_masks_digits_and_names_controls() {
        let view = ViewContent::Pin(PinView {
            title: String::from("Enter your PIN code"),
            note: None,
            masked_digits: 3,
            anti_phishing: Some(String::from("apple river")),
            keypad: KeypadView {
                rows: [
                    [KeypadKey::Digit(4), KeypadKey::Digit(0), KeypadKey::Digit(7)],
                    [KeypadKey::Digit(1), KeypadKey::Digit(9), KeypadKey::Digit(2)],
                    [KeypadKey::Digit(8), KeypadKey::Digit(6), KeypadKey::Digit(3)],
                    [KeypadKey::Reset, KeypadKey::Digit(5), KeypadKey::Confirm],
                ],
                styles: ButtonStyles::default(),
            },
        });

        let mut out = Vec::new();
        render(&view, &mut out).expect("render");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("pin: ***\n"));
        assert!(text.contains("anti-phishing: apple river"));
        assert!(text.contains("[reset] [  5  ] [ ok  ]"));
    }

    #[test]
    fn recover_view_lists_words_and_flags() {
        let view = ViewContent::RecoverMnemonic(MnemonicEntryView {
            title: String::from("Enter your recovery phrase"),
            words: Zeroizing::new(vec![String::from("abandon"), String::from("zo")]),
            next_word_enabled: true,
            done_enabled: false,
        });

        let mut out = Vec::new();
        render(&view, &mut out).expect("render");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains(" 2. zo\n"));
        assert!(text.contains("[next] [----]"));
    }
}
