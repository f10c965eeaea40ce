use pretty_assertions::assert_eq;
use rank_tree::RankTreeSet;
use rank_tree::command::{Command, ParseError, Reply, execute};

/// Runs a script one line at a time and collects the printed replies.
/// Stops at `EXIT`, like the REPL binary does.
fn transcript(lines: &[&str]) -> Vec<String> {
    let mut set = RankTreeSet::new();
    let mut output = Vec::new();
    for line in lines {
        let command = Command::parse(line).expect(line);
        match execute(&mut set, &command) {
            Reply::Message(message) => output.push(message),
            Reply::Exit => break,
        }
    }
    output
}

#[test]
fn the_reference_session() {
    let output = transcript(&[
        "INSERT 5",
        "INSERT 3",
        "INSERT 8",
        "INSERT 1",
        "INSERT 4",
        "INSERT 3",
        "INORDER",
        "SEARCH 3",
        "COUNT_GREATER 4",
        "COUNT_RANGE 2 6",
        "FIND_KTH 3",
        "DELETE 3",
        "SEARCH 3",
        "INORDER",
        "FIND_KTH 2",
        "DELETE 3",
        "EXIT",
        "INSERT 100",
    ]);
    assert_eq!(
        output,
        vec![
            "Added: 5",
            "Added: 3",
            "Added: 8",
            "Added: 1",
            "Added: 4",
            "Element already exists",
            "[ 1, 3, 4, 5, 8 ]",
            "YES",
            "Elements greater than 4: 2",
            "Elements in range [2, 6]: 3",
            "4",
            "Deleted: 3",
            "NO",
            "[ 1, 4, 5, 8 ]",
            "4",
            "Element does not exist",
        ]
    );
}

#[test]
fn count_replies_echo_their_arguments() {
    let output = transcript(&[
        "INSERT -5",
        "INSERT 0",
        "INSERT 5",
        "COUNT_LESS 0",
        "COUNT_GREATER -6",
        "COUNT_RANGE -5 0",
        "COUNT_RANGE 3 -3",
    ]);
    assert_eq!(
        output,
        vec![
            "Added: -5",
            "Added: 0",
            "Added: 5",
            "Elements less than 0: 1",
            "Elements greater than -6: 3",
            "Elements in range [-5, 0]: 2",
            "Elements in range [3, -3]: 0",
        ]
    );
}

#[test]
fn an_empty_set_enumerates_as_empty_brackets() {
    assert_eq!(transcript(&["INORDER"]), vec!["[  ]"]);
}

#[test]
fn selection_on_an_empty_set_is_always_invalid() {
    assert_eq!(transcript(&["FIND_KTH 1"]), vec!["Invalid index"]);
}

#[test]
fn parse_errors_identify_the_offending_token() {
    assert_eq!(
        Command::parse("FROB 1").unwrap_err(),
        ParseError::UnknownCommand("FROB".into())
    );
    assert_eq!(
        Command::parse("SEARCH").unwrap_err(),
        ParseError::WrongArgumentCount {
            command: "SEARCH".into(),
            expected: 1,
            got: 0,
        }
    );
    assert_eq!(
        Command::parse("DELETE x").unwrap_err(),
        ParseError::InvalidInteger("x".into())
    );
    assert_eq!(Command::parse("").unwrap_err(), ParseError::Empty);
}

#[test]
fn parse_errors_render_readable_messages() {
    assert_eq!(
        Command::parse("FROB 1").unwrap_err().to_string(),
        "unknown command `FROB`"
    );
    assert_eq!(
        Command::parse("COUNT_RANGE 1").unwrap_err().to_string(),
        "`COUNT_RANGE` expects 2 argument(s), got 1"
    );
    assert_eq!(
        Command::parse("INSERT ten").unwrap_err().to_string(),
        "invalid integer `ten`"
    );
}
