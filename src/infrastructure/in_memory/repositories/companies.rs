use crate::domain::{
    entities::companies::CompanyEntity, repositories::companies::CompanyRepository,
};

pub struct InMemoryCompanyRepository {
    companies: Vec<CompanyEntity>,
}

impl InMemoryCompanyRepository {
    pub fn new(companies: Vec<CompanyEntity>) -> Self {
        Self { companies }
    }
}

impl CompanyRepository for InMemoryCompanyRepository {
    fn find_by_id(&self, company_id: &str) -> Option<CompanyEntity> {
        self.companies
            .iter()
            .find(|company| company.id == company_id)
            .cloned()
    }

    fn list_companies(&self) -> Vec<CompanyEntity> {
        self.companies.clone()
    }
}
