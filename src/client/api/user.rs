use crate::{
    client::{
        api::{transport::Method, ApiClient, Auth},
        error::ClientError,
    },
    model::{
        api::MutationResultDto,
        user::{Role, RoleDto, SaveUserDto, SellerRequestPatchDto, SellerRequestStatus, UserDto},
    },
};

impl ApiClient {
    /// Upsert the signed in user's profile; called after every sign in.
    pub async fn save_user(&self, user: &SaveUserDto) -> Result<MutationResultDto, ClientError> {
        self.mutate(Method::Post, "/user", Some(user)).await
    }

    pub async fn get_role(&self) -> Result<Role, ClientError> {
        let role: RoleDto = self.get("/user/role", Auth::Required).await?;
        Ok(role.role)
    }

    pub async fn get_users(&self) -> Result<Vec<UserDto>, ClientError> {
        self.get_list("/users", Auth::Required).await
    }

    pub async fn update_user_role(
        &self,
        email: &str,
        role: Role,
    ) -> Result<MutationResultDto, ClientError> {
        self.mutate(
            Method::Patch,
            &format!("/users/{}/role", urlencoding::encode(email)),
            Some(&RoleDto { role }),
        )
        .await
    }

    pub async fn get_seller_requests(&self) -> Result<Vec<UserDto>, ClientError> {
        self.get_list("/seller-requests", Auth::Required).await
    }

    /// Ask to become a seller as the signed in customer.
    pub async fn request_seller(&self) -> Result<MutationResultDto, ClientError> {
        self.mutate::<()>(Method::Post, "/seller-requests", None)
            .await
    }

    pub async fn review_seller_request(
        &self,
        email: &str,
        status: SellerRequestStatus,
    ) -> Result<MutationResultDto, ClientError> {
        self.mutate(
            Method::Patch,
            &format!("/seller-requests/{}", urlencoding::encode(email)),
            Some(&SellerRequestPatchDto { status }),
        )
        .await
    }
}
