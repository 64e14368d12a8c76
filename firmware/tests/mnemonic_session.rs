#![cfg(feature = "ui-tests")]

use futures::executor::block_on;
use keyguard_firmware::ui::fixtures::{self, TWELVE_WORD_PHRASE};
use keyguard_firmware::ui::{
    ButtonEvent, EntrySession, GeneratedMnemonicScreen, MnemonicCommand, MnemonicEntryConfig,
    MnemonicPhase, PendingRequest, RecoverMnemonicScreen, RevealConfig, SecretText, ViewContent,
    labels,
};

fn type_letters(session: &mut EntrySession<'_, RecoverMnemonicScreen>, text: &str) {
    for c in text.chars() {
        let label = c.to_string();
        session
            .handle_event(&ButtonEvent::released(&label))
            .expect("letter");
    }
}

fn tap(session: &mut EntrySession<'_, RecoverMnemonicScreen>, label: &str) {
    session
        .handle_event(&ButtonEvent::released(label))
        .expect("activation");
}

#[test]
fn twelve_word_phrase_resolves_through_labels() {
    let request: PendingRequest<SecretText> = PendingRequest::new();
    let mut session = EntrySession::new(fixtures::recovery_screen(), &request);

    for _ in 0..11 {
        type_letters(&mut session, "ab");
        // "ab" is ambiguous in the sample list, so Next word must stay inert.
        tap(&mut session, labels::NEXT_WORD);
        type_letters(&mut session, "and");
        tap(&mut session, labels::NEXT_WORD);
    }
    assert_eq!(session.screen().words().len(), 12);
    assert!(!session.screen().flags().completion_enabled);

    type_letters(&mut session, "zo");
    assert_eq!(session.screen().phase(), MnemonicPhase::ReadyToFinish);
    tap(&mut session, labels::DONE);

    assert!(!session.is_open());
    let phrase = block_on(request.wait()).expect("phrase");
    assert_eq!(phrase.as_str(), TWELVE_WORD_PHRASE);
}

#[test]
fn checksum_failure_keeps_done_inert() {
    let request = PendingRequest::new();
    let mut session = EntrySession::new(fixtures::recovery_screen(), &request);
    for _ in 0..11 {
        type_letters(&mut session, "aband");
        tap(&mut session, labels::NEXT_WORD);
    }
    type_letters(&mut session, "wro");
    tap(&mut session, labels::DONE);

    assert!(session.is_open());
    let ViewContent::RecoverMnemonic(view) = session.render() else {
        panic!("expected mnemonic view");
    };
    assert!(!view.done_enabled);
    assert!(view.next_word_enabled);
}

#[test]
fn backspace_walks_back_across_a_word_boundary() {
    let request = PendingRequest::new();
    let mut session = EntrySession::new(fixtures::recovery_screen(), &request);
    type_letters(&mut session, "aband");
    tap(&mut session, labels::NEXT_WORD);
    assert_eq!(session.screen().words(), ["abandon", ""]);

    tap(&mut session, labels::BACKSPACE);
    tap(&mut session, labels::BACKSPACE);
    assert_eq!(session.screen().words(), ["abando"]);
    assert_eq!(
        session.screen().phase(),
        MnemonicPhase::Entering {
            word_index: 0,
            partial_len: 6,
        }
    );
}

#[test]
fn abort_mid_word_resolves_with_none() {
    let request = PendingRequest::new();
    let mut session = EntrySession::new(fixtures::recovery_screen(), &request);
    type_letters(&mut session, "abs");
    tap(&mut session, labels::BACK);

    assert_eq!(block_on(request.wait()), None);
    assert_eq!(
        session.apply(MnemonicCommand::Char('a')),
        Err(keyguard_firmware::EntryError::ScreenClosed)
    );
}

#[test]
fn permissive_screen_submits_unchecked_phrase() {
    let request = PendingRequest::new();
    let screen = RecoverMnemonicScreen::new(MnemonicEntryConfig::default());
    let mut session = EntrySession::new(screen, &request);
    type_letters(&mut session, "Legal");
    tap(&mut session, labels::DONE);
    assert_eq!(block_on(request.wait()).expect("phrase").as_str(), "legal");
}

#[test]
fn generated_phrase_toggles_length_before_confirmation() {
    let request = PendingRequest::new();
    let screen = GeneratedMnemonicScreen::new(RevealConfig::default(), fixtures::counting_generator());
    let mut session = EntrySession::new(screen, &request);
    assert_eq!(session.screen().word_count(), 12);

    for label in [labels::USE_24_WORDS, labels::NEXT] {
        session
            .handle_event(&ButtonEvent::released(label))
            .expect("activation");
    }

    let phrase = block_on(request.wait()).expect("phrase");
    assert_eq!(phrase.split(' ').count(), 24);
    assert!(phrase.split(' ').all(|word| word == "w1"));
}
