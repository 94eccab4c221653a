//! Refund operation handlers.

use super::single_page_pagination;
use crate::dispatch::RefundOp;
use crate::error::NodeError;
use crate::host::ParameterResolver;
use crate::run::OperationOutput;
use waybill_client::ShippoClient;
use waybill_core::fields;
use waybill_core::types::RefundCreate;

pub(crate) async fn run(
    client: &ShippoClient,
    params: &dyn ParameterResolver,
    op: RefundOp,
    index: usize,
) -> Result<OperationOutput, NodeError> {
    match op {
        RefundOp::Create => {
            let options = params.object_param("options", index);
            let refund = RefundCreate {
                transaction: params.required_string("transactionId", index)?,
                is_async: fields::bool_field(&options, "async"),
            };
            Ok(OperationOutput::Single(
                client.create_refund(&refund).await?,
            ))
        }
        RefundOp::Get => {
            let refund_id = params.required_string("refundId", index)?;
            Ok(OperationOutput::Single(client.get_refund(&refund_id).await?))
        }
        RefundOp::GetAll => Ok(OperationOutput::Many(
            client
                .list_refunds(single_page_pagination(params, index))
                .await?,
        )),
    }
}
