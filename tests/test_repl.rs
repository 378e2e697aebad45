//! End-to-end sessions through the command loop with in-memory I/O.

use contact_assistant::{Repl, State};
use std::io::Cursor;

fn session(script: &str) -> (Vec<String>, State, usize) {
    let mut output = Vec::new();
    let (state, contacts) = {
        let mut repl = Repl::new(Cursor::new(script.to_string()), &mut output, 7);
        repl.run().unwrap();
        (repl.state(), repl.book().len())
    };

    let text = String::from_utf8(output).unwrap();
    let replies = text
        .lines()
        .skip(1)
        .map(|line| line.trim_start_matches("Enter a command: ").to_string())
        // A bare prompt is left behind when input ends without `exit`
        .filter(|reply| !reply.is_empty())
        .collect();
    (replies, state, contacts)
}

#[test]
fn test_full_session() {
    let (replies, state, contacts) = session(
        "hello\n\
         add Alice 1234567890\n\
         add Bob 0987654321\n\
         phone Alice\n\
         add Alice 12\n\
         nonsense\n\
         \n\
         exit\n\
         add Carol 1111111111\n",
    );

    assert_eq!(state, State::Terminated);
    assert_eq!(contacts, 2);
    assert_eq!(
        replies,
        vec![
            "How can I help you?",
            "Contact added.",
            "Contact added.",
            "Contact name: Alice, phones: 1234567890",
            "ValidationError: The number is not valid!",
            "Invalid command.",
            "Invalid command.",
            "Good bye!",
        ]
    );
}

#[test]
fn test_greeting_is_printed_first() {
    let mut output = Vec::new();
    Repl::new(Cursor::new("close\n"), &mut output, 7)
        .run()
        .unwrap();

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("Welcome to the assistant bot!\n"));
    assert!(text.ends_with("Good bye!\n"));
}

#[test]
fn test_end_of_input_without_exit() {
    let (replies, state, contacts) = session("add Alice 1234567890\n");

    assert_eq!(state, State::Terminated);
    assert_eq!(contacts, 1);
    assert_eq!(replies, vec!["Contact added."]);
}
