use crate::{
    client::{
        api::{ApiClient, Auth},
        error::ClientError,
    },
    model::statistics::{AdminStatisticsDto, CustomerStatisticsDto, SellerStatisticsDto},
};

impl ApiClient {
    pub async fn get_admin_statistics(&self) -> Result<AdminStatisticsDto, ClientError> {
        self.get("/admin-statistics", Auth::Required).await
    }

    pub async fn get_seller_statistics(
        &self,
        email: &str,
    ) -> Result<SellerStatisticsDto, ClientError> {
        self.get(
            &format!("/seller-statistics/{}", urlencoding::encode(email)),
            Auth::Required,
        )
        .await
    }

    pub async fn get_customer_statistics(
        &self,
        email: &str,
    ) -> Result<CustomerStatisticsDto, ClientError> {
        self.get(
            &format!("/customer-statistics/{}", urlencoding::encode(email)),
            Auth::Required,
        )
        .await
    }
}
