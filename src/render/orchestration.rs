//! Orchestration segment.
//!
//! Emits the generated program's `main`: build the network over all hosts,
//! start it, bind one handle per host, run the sender on the first host and
//! the receiver on the last, join both, stop the network.

use super::protocols::{RECEIVER_PROTOCOL, SENDER_PROTOCOL};
use super::types::{Line, Segment, SegmentKind};
use super::ENTRY_FUNCTION;
use crate::template::TemplateConfig;
use crate::utils::python::{quote, string_list};

/// Local variable holding the handle of `host`
fn host_var(host: &str) -> String {
    format!("host_{}", host)
}

/// Render the `main` function for the given topology and hosts
pub fn render_orchestration(topology: &str, config: &TemplateConfig) -> Segment {
    let hosts = config.host_names();
    let sender = config.sender_host();
    let receiver = config.receiver_host();

    let mut lines = vec![
        Line::code(0, format!("def {}():", ENTRY_FUNCTION)),
        Line::code(1, "network = Network.get_instance()"),
        Line::code(1, format!("nodes = {}", string_list(hosts))),
        Line::code(1, format!("network.generate_topology(nodes, {})", quote(topology))),
        Line::code(1, "network.start(nodes)"),
        Line::Blank,
    ];

    for host in hosts {
        lines.push(Line::code(
            1,
            format!("{} = network.get_host({})", host_var(host), quote(host)),
        ));
    }
    lines.push(Line::Blank);

    lines.push(Line::code(
        1,
        format!(
            "t1 = {}.run_protocol({}, ({}.host_id,))",
            host_var(sender),
            SENDER_PROTOCOL,
            host_var(receiver)
        ),
    ));
    lines.push(Line::code(
        1,
        format!(
            "t2 = {}.run_protocol({}, ({}.host_id,))",
            host_var(receiver),
            RECEIVER_PROTOCOL,
            host_var(sender)
        ),
    ));
    lines.push(Line::code(1, "t1.join()"));
    lines.push(Line::code(1, "t2.join()"));
    lines.push(Line::code(1, "network.stop(True)"));
    lines.push(Line::Blank);

    Segment::new(SegmentKind::Orchestration, lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(hosts: &[&str]) -> TemplateConfig {
        TemplateConfig::builder()
            .file_name("template.py")
            .node_count(hosts.len())
            .host_names(hosts.iter().map(|h| h.to_string()).collect())
            .backend_key(1)
            .topology_key(1)
            .build()
            .unwrap()
    }

    #[test]
    fn test_three_default_hosts() {
        let segment = render_orchestration("mesh", &config(&["A", "B", "C"]));

        let expected = "def main():\n\
\x20   network = Network.get_instance()\n\
\x20   nodes = ['A', 'B', 'C']\n\
\x20   network.generate_topology(nodes, 'mesh')\n\
\x20   network.start(nodes)\n\
\n\
\x20   host_A = network.get_host('A')\n\
\x20   host_B = network.get_host('B')\n\
\x20   host_C = network.get_host('C')\n\
\n\
\x20   t1 = host_A.run_protocol(protocol_1, (host_C.host_id,))\n\
\x20   t2 = host_C.run_protocol(protocol_2, (host_A.host_id,))\n\
\x20   t1.join()\n\
\x20   t2.join()\n\
\x20   network.stop(True)\n\
\n";
        assert_eq!(segment.render(), expected);
    }

    #[test]
    fn test_roles_follow_host_order() {
        let segment = render_orchestration("ring", &config(&["Zed", "Mid", "Alice"]));
        let code: Vec<&str> = segment.code_lines().collect();

        assert!(code.contains(&"t1 = host_Zed.run_protocol(protocol_1, (host_Alice.host_id,))"));
        assert!(code.contains(&"t2 = host_Alice.run_protocol(protocol_2, (host_Zed.host_id,))"));
        assert!(code.contains(&"network.generate_topology(nodes, 'ring')"));
    }

    #[test]
    fn test_one_handle_per_host() {
        let segment = render_orchestration("star", &config(&["A", "B", "C", "D", "E"]));
        let handles = segment
            .code_lines()
            .filter(|line| line.contains("= network.get_host("))
            .count();
        assert_eq!(handles, 5);
    }
}
