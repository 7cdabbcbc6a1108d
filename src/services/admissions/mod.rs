pub mod assign;
pub mod delete;
pub mod feed;
pub mod grade;
pub mod list;
pub mod start;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::launcher::TrainerLauncher;
use crate::models::admissions::requests::{
    AdmissionResultRequest, AssignAdmissionsRequest, GradeAdmissionRequest, MyAdmissionsParams,
};
use crate::storage::Storage;

pub struct AdmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdmissionService {
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

    pub(crate) fn get_launcher(&self, request: &HttpRequest) -> Arc<dyn TrainerLauncher> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn TrainerLauncher>>>()
            .expect("Trainer launcher not found in app data")
            .get_ref()
            .clone()
    }

    // 为多个学员分配场景
    pub async fn assign(
        &self,
        assign_data: AssignAdmissionsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_admissions(self, assign_data, request).await
    }

    // 教员评分
    pub async fn grade(
        &self,
        admission_id: i64,
        grade_data: GradeAdmissionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_admission(self, admission_id, grade_data, request).await
    }

    // 训练器回传结果
    pub async fn submit_result(
        &self,
        result: AdmissionResultRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        feed::submit_result(self, result, request).await
    }

    pub async fn delete(&self, admission_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        delete::delete_admission(self, admission_id, request).await
    }

    pub async fn get(&self, admission_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::get_admission(self, admission_id, request).await
    }

    pub async fn list_all(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_admissions(self, request).await
    }

    pub async fn list_for_user(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_user_admissions(self, user_id, request).await
    }

    // 当前学员的任务
    pub async fn list_mine(
        &self,
        params: MyAdmissionsParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_my_admissions(self, params, request).await
    }

    pub async fn dashboard(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::my_dashboard(self, request).await
    }

    // 导出场景并启动训练器
    pub async fn start(&self, admission_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        start::start_admission(self, admission_id, request).await
    }
}
