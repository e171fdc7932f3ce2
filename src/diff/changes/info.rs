//! Info, Contact and License comparison.
//!
//! All three are descriptive: their changes are counted but never break a
//! client, so every report here has a breaking total of 0.

use super::extensions::{compare_extensions, ExtensionChanges};
use crate::diff::checks::{check_object, check_properties, PropertyCheck};
use crate::diff::{Changed, PropertyChanges};
use crate::model::base::{Contact, Info, License};
use crate::model::labels::{
    CONTACT_LABEL, DESCRIPTION_LABEL, EMAIL_LABEL, IDENTIFIER_LABEL, LICENSE_LABEL, NAME_LABEL,
    SUMMARY_LABEL, TERMS_OF_SERVICE_LABEL, TITLE_LABEL, URL_LABEL, VERSION_LABEL,
};
use serde::Serialize;

/// Changes to a Contact object.
#[derive(Debug, Clone, Serialize)]
pub struct ContactChanges {
    #[serde(flatten)]
    pub property_changes: PropertyChanges,
    pub extension_changes: Option<ExtensionChanges>,
}

impl Changed for ContactChanges {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes() + self.extension_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        0
    }
}

/// Changes to a License object.
#[derive(Debug, Clone, Serialize)]
pub struct LicenseChanges {
    #[serde(flatten)]
    pub property_changes: PropertyChanges,
    pub extension_changes: Option<ExtensionChanges>,
}

impl Changed for LicenseChanges {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes() + self.extension_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        0
    }
}

/// Changes to an Info object and the Contact and License inside it.
#[derive(Debug, Clone, Serialize)]
pub struct InfoChanges {
    #[serde(flatten)]
    pub property_changes: PropertyChanges,
    pub contact_changes: Option<ContactChanges>,
    pub license_changes: Option<LicenseChanges>,
    pub extension_changes: Option<ExtensionChanges>,
}

impl Changed for InfoChanges {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes()
            + self.contact_changes.total_changes()
            + self.license_changes.total_changes()
            + self.extension_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        0
    }
}

#[must_use]
pub fn compare_contact(left: &Contact, right: &Contact) -> Option<ContactChanges> {
    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::fields(NAME_LABEL, &left.name, &right.name, false),
            PropertyCheck::fields(URL_LABEL, &left.url, &right.url, false),
            PropertyCheck::fields(EMAIL_LABEL, &left.email, &right.email, false),
        ],
        &mut changes,
    );
    let report = ContactChanges {
        property_changes: PropertyChanges::new(changes),
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    };
    (report.total_changes() > 0).then_some(report)
}

#[must_use]
pub fn compare_license(left: &License, right: &License) -> Option<LicenseChanges> {
    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::fields(NAME_LABEL, &left.name, &right.name, false),
            PropertyCheck::fields(IDENTIFIER_LABEL, &left.identifier, &right.identifier, false),
            PropertyCheck::fields(URL_LABEL, &left.url, &right.url, false),
        ],
        &mut changes,
    );
    let report = LicenseChanges {
        property_changes: PropertyChanges::new(changes),
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    };
    (report.total_changes() > 0).then_some(report)
}

/// Compare two Info objects.
///
/// A Contact or License present on both sides is compared field by field;
/// one present on a single side is reported as added or removed.
#[must_use]
pub fn compare_info(left: &Info, right: &Info) -> Option<InfoChanges> {
    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::fields(TITLE_LABEL, &left.title, &right.title, false),
            PropertyCheck::fields(SUMMARY_LABEL, &left.summary, &right.summary, false),
            PropertyCheck::fields(DESCRIPTION_LABEL, &left.description, &right.description, false),
            PropertyCheck::fields(
                TERMS_OF_SERVICE_LABEL,
                &left.terms_of_service,
                &right.terms_of_service,
                false,
            ),
            PropertyCheck::fields(VERSION_LABEL, &left.version, &right.version, false),
        ],
        &mut changes,
    );

    let contact_changes = check_object(
        CONTACT_LABEL,
        left.contact.as_ref(),
        right.contact.as_ref(),
        &mut changes,
        false,
        false,
        compare_contact,
    );
    let license_changes = check_object(
        LICENSE_LABEL,
        left.license.as_ref(),
        right.license.as_ref(),
        &mut changes,
        false,
        false,
        compare_license,
    );

    let report = InfoChanges {
        property_changes: PropertyChanges::new(changes),
        contact_changes,
        license_changes,
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    };
    (report.total_changes() > 0).then_some(report)
}
