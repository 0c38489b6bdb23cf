use crate::eol_analysis::domain::{
    Dataset, SupportContext, SupportRequest, SupportRequestError, SupportRequestForm,
};
use crate::eol_analysis::services::{PackageDetail, PackageDetailProjector};

/// Detail page of one package, owning the support request popup
#[derive(Debug, Clone)]
pub struct PackagePage {
    ecosystem: String,
    package: String,
    support_form: SupportRequestForm,
}

impl PackagePage {
    pub fn new(ecosystem: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            ecosystem: ecosystem.into(),
            package: package.into(),
            support_form: SupportRequestForm::new(),
        }
    }

    pub fn ecosystem(&self) -> &str {
        &self.ecosystem
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Recomputes the page from the dataset
    pub fn view<'a>(&self, dataset: &'a Dataset) -> PackagePageView<'a> {
        PackagePageView {
            ecosystem: self.ecosystem.clone(),
            package: self.package.clone(),
            detail: PackageDetailProjector::resolve(dataset, &self.ecosystem, &self.package),
        }
    }

    /// Opens the support form with this page's package as context
    pub fn request_support(&mut self) {
        self.support_form.open(Some(SupportContext::new(
            self.package.clone(),
            self.ecosystem.clone(),
        )));
    }

    pub fn support_form(&self) -> &SupportRequestForm {
        &self.support_form
    }

    pub fn support_form_mut(&mut self) -> &mut SupportRequestForm {
        &mut self.support_form
    }

    pub fn cancel_support(&mut self) {
        self.support_form.cancel();
    }

    pub fn dismiss_support(&mut self) {
        self.support_form.dismiss();
    }

    pub fn submit_support(&mut self) -> Result<SupportRequest, SupportRequestError> {
        self.support_form.submit()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackagePageView<'a> {
    pub ecosystem: String,
    pub package: String,
    /// `None` renders as "package not found"
    pub detail: Option<PackageDetail<'a>>,
}

impl PackagePageView<'_> {
    pub fn is_found(&self) -> bool {
        self.detail.is_some()
    }
}
