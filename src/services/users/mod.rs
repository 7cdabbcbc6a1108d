pub mod assign;
pub mod list;
pub mod stats;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::models::admissions::requests::AssignScenariosRequest;
use crate::models::users::requests::{TraineeListParams, UpdateUserProfileRequest};
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Option<Arc<dyn ObjectCache>> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
            .map(|data| data.get_ref().clone())
    }

    // 学员列表
    pub async fn list_trainees(
        &self,
        query: TraineeListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_trainees(self, query, request).await
    }

    // 用户统计：资料、任务、平均分
    pub async fn get_user_stats(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        stats::get_user_stats(self, user_id, request).await
    }

    // 更新用户资料
    pub async fn update_profile(
        &self,
        user_id: i64,
        update_data: UpdateUserProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_profile(self, user_id, update_data, request).await
    }

    // 为用户分配多个场景
    pub async fn assign_scenarios(
        &self,
        user_id: i64,
        assign_data: AssignScenariosRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_scenarios(self, user_id, assign_data, request).await
    }
}
