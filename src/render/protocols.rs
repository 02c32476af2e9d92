//! Protocol segment.
//!
//! The protocol bodies are a fixed template; only the names below are
//! referenced by the orchestration segment.

use super::types::{Line, Segment, SegmentKind};

/// Function run by the first host
pub const SENDER_PROTOCOL: &str = "protocol_1";
/// Function run by the last host
pub const RECEIVER_PROTOCOL: &str = "protocol_2";
/// Qubits sent and received per run
pub const QUBIT_COUNT: usize = 5;
/// Seconds the receiver waits for each qubit
pub const RECEIVE_TIMEOUT_SECS: u32 = 10;

/// Render the sender and receiver protocol definitions
pub fn render_protocols() -> Segment {
    let lines = vec![
        Line::code(0, format!("def {}(host, receiver):", SENDER_PROTOCOL)),
        Line::comment(1, "Here we write the protocol code for a host."),
        Line::code(1, format!("for i in range({}):", QUBIT_COUNT)),
        Line::code(2, "q = Qubit(host)"),
        Line::code(2, "q.H()"),
        Line::code(2, "print('Sending qubit %d.' % (i+1))"),
        Line::code(2, "host.send_qubit(receiver, q, await_ack=True)"),
        Line::code(2, "print('Qubit %d was received by %s.' % (i+1, receiver))"),
        Line::Blank,
        Line::Blank,
        Line::code(0, format!("def {}(host, sender):", RECEIVER_PROTOCOL)),
        Line::comment(1, "Here we write the protocol code for another host."),
        Line::code(1, format!("for _ in range({}):", QUBIT_COUNT)),
        Line::comment(
            2,
            format!("Wait for a qubit from the sender for {} seconds.", RECEIVE_TIMEOUT_SECS),
        ),
        Line::code(
            2,
            format!("q = host.get_data_qubit(sender, wait={})", RECEIVE_TIMEOUT_SECS),
        ),
        Line::code(
            2,
            "print('%s received a qubit in the %d state.' % (host.host_id, q.measure()))",
        ),
        Line::Blank,
        Line::Blank,
    ];
    Segment::new(SegmentKind::Protocols, lines)
}
