//! Breadcrumb trail component.

mod breadcrumbs_component;

pub use breadcrumbs_component::BreadcrumbsComponent;
