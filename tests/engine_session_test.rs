//! End-to-end protocol sessions over in-memory line sources.

use connect6_gtp::{Cell, Engine, EngineConfig, Stone};
use std::io::Cursor;

fn seeded_engine() -> Engine {
    Engine::new(&EngineConfig::new().with_seed(42)).expect("Engine should build")
}

/// Runs `script` through a fresh seeded engine and returns the raw output.
fn session(script: &str) -> (Engine, String) {
    let mut engine = seeded_engine();
    let mut out = Vec::new();
    engine
        .run(Cursor::new(script.to_string()), &mut out)
        .expect("In-memory I/O should not fail");
    (engine, String::from_utf8(out).expect("Replies are UTF-8"))
}

/// Splits raw output into reply bodies, dropping the blank-line terminators.
fn replies(output: &str) -> Vec<&str> {
    output
        .split_terminator("\n\n")
        .collect()
}

#[test]
fn test_each_reply_ends_with_blank_line() {
    let (_, out) = session("protocol_version\nname\nversion\n");
    assert!(out.ends_with("\n\n"));
    assert_eq!(replies(&out).len(), 3);
}

#[test]
fn test_ids_echoed_on_success_only() {
    let (_, out) = session("3 board_size\n4 boardsize 0\n5 frobnicate\n");
    assert_eq!(
        replies(&out),
        vec![
            "= 3 19",
            "? boardsize error: unacceptable size",
            "? unknown command: frobnicate",
        ]
    );
}

#[test]
fn test_list_commands_matches_dispatch() {
    let (mut engine, out) = session("list_commands\n");
    let body = out
        .strip_prefix("= ")
        .and_then(|s| s.strip_suffix("\n\n"))
        .expect("Success reply");
    let names: Vec<&str> = body.lines().collect();
    assert!(names.contains(&"gogui-rules_legal_moves"));
    assert!(names.contains(&"legal_moves"));
    assert!(names.contains(&"quit"));
    for name in names {
        if name == "quit" {
            continue;
        }
        let reply = engine.handle_line(name).expect("Reply");
        assert!(
            !reply.message().starts_with("unknown command"),
            "{name} listed but not dispatched"
        );
    }
}

#[test]
fn test_quit_stops_reading() {
    let (engine, out) = session("quit\nname\n");
    assert_eq!(replies(&out), vec!["= "]);
    assert!(!engine.is_running());
}

#[test]
fn test_end_of_input_is_silent() {
    let (engine, out) = session("# nothing but a comment\n\n");
    assert!(out.is_empty());
    assert!(engine.is_running());
}

#[test]
fn test_errors_do_not_stop_the_loop() {
    let (_, out) = session("play\nplay B\nplay B Z99\nplay B I3\nboardsize x\nkomi\nside_to_move\n");
    let replies = replies(&out);
    assert_eq!(replies.len(), 7);
    assert_eq!(replies[0], "? play error: missing argument: color");
    assert_eq!(replies[1], "? play error: missing argument: vertex");
    assert_eq!(replies[2], "? play error: invalid column: Z");
    assert_eq!(replies[3], "? play error: invalid column: I");
    assert_eq!(replies[4], "? boardsize error: invalid board size: x");
    assert_eq!(replies[5], "? komi error: missing argument: komi");
    assert_eq!(replies[6], "= black");
}

#[test]
fn test_turn_cycle_repeats_after_four_plies() {
    let (engine, out) = session(
        "side_to_move\nplay B K10\nside_to_move\nplay W A1\nside_to_move\nplay W PASS\nside_to_move\nplay B B2\nside_to_move\n",
    );
    let sides: Vec<&str> = replies(&out)
        .into_iter()
        .filter(|r| *r != "= ")
        .collect();
    assert_eq!(sides, vec!["= black", "= white", "= white", "= black", "= black"]);
    assert_eq!(engine.game().history().len(), 4);
}

#[test]
fn test_boardsize_resets_everything() {
    let (engine, out) = session("play B A1\nplay W B2\nboardsize 7\nboard_size\ngogui-rules_board\n");
    let replies = replies(&out);
    assert_eq!(replies[3], "= 7");
    let board = replies[4].strip_prefix("= ").unwrap();
    assert_eq!(board.lines().count(), 7);
    assert!(board.lines().all(|l| l == ". . . . . . ."));
    assert!(engine.game().history().is_empty());
    assert!(engine.game().board().cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_boardsize_bounds() {
    let (_, out) = session("boardsize 1\nboardsize 101\nboardsize 2\nboardsize 100\nboard_size\n");
    assert_eq!(
        replies(&out),
        vec![
            "? boardsize error: unacceptable size",
            "? boardsize error: unacceptable size",
            "= ",
            "= ",
            "= 100",
        ]
    );
}

#[test]
fn test_clear_board_keeps_size() {
    let (engine, out) = session("boardsize 9\nplay B E5\nclear_board\nboard_size\nlegal_moves\n");
    let replies = replies(&out);
    assert_eq!(replies[3], "= 9");
    assert_eq!(replies[4].split_whitespace().count(), 1 + 81);
    assert!(engine.game().history().is_empty());
}

#[test]
fn test_six_in_a_row_wins() {
    let (engine, out) = session(
        "boardsize 19\nplay B A10\nplay B B10\nplay B C10\nplay B D10\nplay B E10\nplay B F10\nfinal_result\nlegal_moves\nfinal_result\n",
    );
    let replies = replies(&out);
    assert_eq!(replies[7], "= Black wins.");
    assert_eq!(replies[8], "= ");
    assert_eq!(replies[9], "= Black wins.");
    assert_eq!(engine.game().winner(), Some(Stone::Black));
}

#[test]
fn test_five_in_a_row_is_not_a_win() {
    let (_, out) = session(
        "boardsize 9\nplay B A5\nplay B B5\nplay B C5\nplay B D5\nplay B E5\nlegal_moves\nfinal_result\n",
    );
    let replies = replies(&out);
    let moves: Vec<&str> = replies[6].strip_prefix("= ").unwrap().split(' ').collect();
    assert_eq!(moves.len(), 81 - 5);
    assert_eq!(moves[0], "A9");
    assert_eq!(moves[moves.len() - 1], "J1");
    for taken in ["A5", "B5", "C5", "D5", "E5"] {
        assert!(!moves.contains(&taken));
    }
    assert_eq!(replies[7], "= No result.");
}

#[test]
fn test_white_diagonal_win() {
    let (_, out) = session(
        "boardsize 8\nplay W A1\nplay W B2\nplay W C3\nplay W D4\nplay W E5\nplay W F6\ngogui-rules_legal_moves\ngogui-rules_final_result\n",
    );
    let replies = replies(&out);
    assert_eq!(replies[7], "= ");
    assert_eq!(replies[8], "= White wins.");
}

#[test]
fn test_occupied_vertex_rejected() {
    let (engine, out) = session("play B D4\nplay W d4\nside_to_move\n");
    let replies = replies(&out);
    assert_eq!(replies[1], "? play error: vertex D4 is already occupied");
    assert_eq!(replies[2], "= white");
    assert_eq!(engine.game().history().len(), 1);
}

#[test]
fn test_genmove_fills_board_then_passes() {
    let mut script = String::from("boardsize 2\n");
    for _ in 0..5 {
        script.push_str("genmove\n");
    }
    let (engine, out) = session(&script);
    let replies = replies(&out);
    assert_eq!(replies[5], "= PASS");

    let mut placed: Vec<&str> = replies[1..5]
        .iter()
        .map(|r| r.strip_prefix("= ").unwrap())
        .collect();
    placed.sort_unstable();
    assert_eq!(placed, vec!["A1", "A2", "B1", "B2"]);

    assert_eq!(engine.game().board().stone_count(), 4);
    let last = engine.game().history().last().unwrap();
    assert!(last.is_pass());
}

#[test]
fn test_genmove_deterministic_for_seed() {
    let script = "boardsize 15\ngenmove b\ngenmove w\ngenmove w\ngenmove b\n";
    let (_, first) = session(script);
    let (_, second) = session(script);
    assert_eq!(first, second);
}

#[test]
fn test_genmove_then_play_same_vertex_fails() {
    let (_, out) = session("boardsize 2\ngenmove b\n");
    let vertex = replies(&out)[1].strip_prefix("= ").unwrap().to_string();

    let (_, out) = session(&format!("boardsize 2\ngenmove b\nplay w {vertex}\n"));
    assert!(replies(&out)[2].starts_with("? play error:"));
}

#[test]
fn test_wide_board_vertices() {
    let (_, out) = session("boardsize 25\nplay B AF25\nplay W A1\ngogui-rules_board\n");
    let replies = replies(&out);
    assert_eq!(replies[1], "= ");
    let board = replies[3].strip_prefix("= ").unwrap();
    let rows: Vec<&str> = board.lines().collect();
    assert_eq!(rows.len(), 25);
    assert!(rows[0].ends_with('X'));
    assert!(rows[24].starts_with('O'));
}

#[test]
fn test_invalid_utf8_line_is_rejected_and_loop_continues() {
    let mut engine = seeded_engine();
    let mut out = Vec::new();
    engine
        .run(Cursor::new(&b"name\nplay B \xff\xfe\nside_to_move\n"[..]), &mut out)
        .expect("Undecodable input should not end the session");
    let out = String::from_utf8(out).expect("Replies are UTF-8");
    let replies = replies(&out);
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0], "= connect6-gtp");
    assert!(replies[1].starts_with("? invalid UTF-8 in request"));
    assert_eq!(replies[2], "= black");
    assert!(engine.game().history().is_empty());
}

#[test]
fn test_crlf_line_endings() {
    let (_, out) = session("1 boardsize 9\r\n2 board_size\r\n");
    assert_eq!(replies(&out), vec!["= 1 ", "= 2 9"]);
}
