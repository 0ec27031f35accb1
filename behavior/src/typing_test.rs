use super::*;

fn texts(machine: &mut TypingMachine, n: usize) -> Vec<String> {
    (0..n).map(|_| machine.tick().text).collect()
}

#[test]
fn empty_phrase_list_has_no_machine() {
    assert!(TypingMachine::new(Vec::<String>::new()).is_none());
}

#[test]
fn cycles_prefixes_of_each_phrase_then_empties() {
    let mut m = TypingMachine::new(["A", "BB"]).expect("machine");
    let got = texts(&mut m, 12);
    let want = ["A", "", "B", "BB", "B", "", "A", "", "B", "BB", "B", ""];
    assert_eq!(got, want);
}

#[test]
fn delays_follow_phase() {
    let mut m = TypingMachine::new(["AB"]).expect("machine");
    let delays: Vec<u32> = (0..6).map(|_| m.tick().delay_ms).collect();
    assert_eq!(delays, vec![TYPE_CHAR_MS, HOLD_FULL_MS, DELETE_CHAR_MS, HOLD_EMPTY_MS, TYPE_CHAR_MS, HOLD_FULL_MS]);
}

#[test]
fn phases_transition_in_order() {
    let mut m = TypingMachine::new(["AB", "C"]).expect("machine");
    assert_eq!(m.phase(), TypingPhase::Typing);
    m.tick();
    assert_eq!(m.phase(), TypingPhase::Typing);
    m.tick();
    assert_eq!(m.phase(), TypingPhase::PausingFull);
    m.tick();
    assert_eq!(m.phase(), TypingPhase::Deleting);
    m.tick();
    assert_eq!(m.phase(), TypingPhase::PausingEmpty);
    assert_eq!(m.phrase_index(), 1);
    m.tick();
    assert_eq!(m.phase(), TypingPhase::PausingFull);
    assert_eq!(m.text(), "C");
}

#[test]
fn empty_phrase_does_not_error() {
    let mut m = TypingMachine::new(["", "X"]).expect("machine");
    let got = texts(&mut m, 6);
    assert_eq!(got, ["", "", "X", "", "", ""]);
    assert_eq!(m.phrase_index(), 1);
}

#[test]
fn single_phrase_loops_forever() {
    let mut m = TypingMachine::new(["Hi"]).expect("machine");
    for _ in 0..1_000 {
        let step = m.tick();
        assert!(step.text.len() <= 2);
        assert_eq!(m.phrase_index(), 0);
    }
}

#[test]
fn multibyte_characters_are_typed_whole() {
    let mut m = TypingMachine::new(["héé"]).expect("machine");
    assert_eq!(texts(&mut m, 3), ["h", "hé", "héé"]);
}

#[test]
fn parse_phrases_accepts_json_array() {
    assert_eq!(
        TypingMachine::parse_phrases(r#"["Engineer", "Writer, Speaker"]"#),
        vec!["Engineer".to_owned(), "Writer, Speaker".to_owned()]
    );
}

#[test]
fn parse_phrases_falls_back_to_commas() {
    assert_eq!(
        TypingMachine::parse_phrases(" Engineer, ,Designer "),
        vec!["Engineer".to_owned(), "Designer".to_owned()]
    );
    assert!(TypingMachine::parse_phrases("").is_empty());
}

#[test]
fn title_reveal_types_highlight_as_one_unit() {
    let mut reveal = TitleReveal::new("Hi, I'm Ada L", Some("Ada L"));
    let mut last = Vec::new();
    let mut steps = 0;
    while let Some(segments) = reveal.advance() {
        last = segments;
        steps += 1;
    }
    assert_eq!(steps, "Hi, I'm ".len() + 1);
    assert_eq!(
        last,
        vec![
            TextSegment { text: "Hi, I'm ".to_owned(), highlight: false },
            TextSegment { text: "Ada L".to_owned(), highlight: true },
        ]
    );
    assert!(reveal.is_done());
    assert!(reveal.advance().is_none());
}

#[test]
fn title_reveal_without_match_is_plain() {
    let mut reveal = TitleReveal::new("Hello", Some("Bob"));
    assert_eq!(
        reveal.advance(),
        Some(vec![TextSegment { text: "H".to_owned(), highlight: false }])
    );
    let mut plain = TitleReveal::new("ab", None);
    assert_eq!(plain.advance(), Some(vec![TextSegment { text: "a".to_owned(), highlight: false }]));
    assert_eq!(plain.advance(), Some(vec![TextSegment { text: "ab".to_owned(), highlight: false }]));
    assert!(plain.is_done());
    assert!(plain.advance().is_none());
}

#[test]
fn title_reveal_continues_after_highlight() {
    let mut reveal = TitleReveal::new("I am X!", Some("X"));
    while reveal.advance().is_some() {}
    let segments = reveal.segments();
    assert_eq!(segments.len(), 3);
    assert!(segments[1].highlight);
    assert_eq!(segments[2].text, "!");
}
