//! # Segment Renderers
//!
//! The generated program is built from four independent segments, each
//! produced by a pure function of the already-validated configuration:
//!
//! 1. **Imports** (`imports.rs`): runtime imports plus the chosen backend
//! 2. **Protocols** (`protocols.rs`): fixed sender and receiver bodies
//! 3. **Orchestration** (`orchestration.rs`): the `main` function
//! 4. **Entry point** (`entry.rs`): the `__main__` guard
//!
//! Renderers receive resolved registry entries (a backend descriptor, a
//! topology name), never raw keys. They do no I/O; the assembler is the
//! only place text reaches the filesystem.
//!
//! ## Generated Program Shape
//!
//! ```python
//! from qunetsim.components import Host, Network
//! ...
//! def protocol_1(host, receiver): ...
//! def protocol_2(host, sender): ...
//! def main():
//!     network = Network.get_instance()
//!     ...
//!     t1 = host_A.run_protocol(protocol_1, (host_C.host_id,))
//!     t2 = host_C.run_protocol(protocol_2, (host_A.host_id,))
//!     ...
//! if __name__ == '__main__':
//!     main()
//! ```

pub mod entry;
pub mod imports;
pub mod orchestration;
pub mod protocols;
pub mod types;

pub use entry::render_entry_point;
pub use imports::render_imports;
pub use orchestration::render_orchestration;
pub use protocols::{render_protocols, RECEIVER_PROTOCOL, SENDER_PROTOCOL};
pub use types::{Line, Segment, SegmentKind};

/// Name of the generated orchestration function
pub const ENTRY_FUNCTION: &str = "main";
