use crate::{
    client::{
        api::{transport::Method, ApiClient, Auth},
        error::ClientError,
    },
    model::{
        api::MutationResultDto,
        order::{NewOrderDto, OrderDto, OrderStatus, OrderStatusPatchDto},
    },
};

fn order_path(id: &str) -> String {
    format!("/orders/{}", urlencoding::encode(id))
}

impl ApiClient {
    pub async fn create_order(&self, order: &NewOrderDto) -> Result<MutationResultDto, ClientError> {
        self.mutate(Method::Post, "/orders", Some(order)).await
    }

    /// Orders placed by the signed in customer.
    pub async fn get_my_orders(&self) -> Result<Vec<OrderDto>, ClientError> {
        self.get_list("/my-orders", Auth::Required).await
    }

    /// Orders for the signed in seller's tickets.
    pub async fn get_managed_orders(&self) -> Result<Vec<OrderDto>, ClientError> {
        self.get_list("/manage-orders", Auth::Required).await
    }

    pub async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<MutationResultDto, ClientError> {
        self.mutate(
            Method::Patch,
            &order_path(id),
            Some(&OrderStatusPatchDto { status }),
        )
        .await
    }

    pub async fn cancel_order(&self, id: &str) -> Result<MutationResultDto, ClientError> {
        self.mutate::<()>(Method::Delete, &order_path(id), None)
            .await
    }
}
