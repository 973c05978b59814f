//! Raw node access: `get` and `set`.

use tabled::Tabled;

use fsremote_core::{CoreError, NodeId, NodeResponse, NodeValue};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

use super::Remote;

#[derive(Tabled)]
struct NodeRow {
    #[tabled(rename = "Node")]
    node: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn value_text(record: &NodeResponse) -> String {
    record
        .value
        .as_ref()
        .map_or_else(|| "-".into(), ToString::to_string)
}

impl From<&NodeResponse> for NodeRow {
    fn from(record: &NodeResponse) -> Self {
        Self {
            node: record.node.to_string(),
            value: value_text(record),
        }
    }
}

pub async fn get(remote: &Remote, nodes: Vec<String>, global: &GlobalOpts) -> Result<(), CliError> {
    let ids: Vec<NodeId> = nodes.into_iter().map(NodeId::from).collect();
    let params = remote
        .ctx
        .gateway()
        .get_multiple(&ids)
        .await
        .map_err(CoreError::from)?;
    let records = params.into_inner();

    let out = output::render_list(
        &global.output,
        &records,
        |r| NodeRow::from(r),
        |r| value_text(r),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

pub async fn set(
    remote: &Remote,
    node: &str,
    value: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let node = NodeId::from(node);
    // Integers go out as numbers, anything else as text.
    let value = value
        .parse::<NodeValue>()
        .unwrap_or_else(|never| match never {});
    remote
        .ctx
        .gateway()
        .set(&node, &value)
        .await
        .map_err(CoreError::from)?;

    output::notice(global, &format!("{node} = {value}"));
    Ok(())
}
