use mockall::automock;

use crate::domain::entities::companies::CompanyEntity;

#[automock]
pub trait CompanyRepository {
    fn find_by_id(&self, company_id: &str) -> Option<CompanyEntity>;
    fn list_companies(&self) -> Vec<CompanyEntity>;
}
