//! Declarative configuration of the two lookup endpoints.
//!
//! Everything endpoint-specific lives here: recognized keys and their
//! priority order, matching rules, output shapes, realm and envelope
//! strings. The shared pipeline is in [`crate::service`].

use crate::lookup::{KeyMatcher, LookupKey};
use crate::service::LookupEndpoint;
use crate::shape::{num_field, str_field, Field, FieldKind};

/// Six-field address whitelist shared by both entity types.
const ADDRESS_FIELDS: &[Field] = &[
    str_field("line1"),
    str_field("line2"),
    str_field("city"),
    str_field("region"),
    str_field("postal"),
    str_field("country"),
];

const BILLING_PERIOD_FIELDS: &[Field] = &[str_field("start"), str_field("end")];

const ACCOUNT_FIELDS: &[Field] = &[
    str_field("accountId"),
    str_field("name"),
    str_field("email"),
    str_field("phone"),
    str_field("membershipTier"),
    Field {
        name: "billingAddress",
        kind: FieldKind::Nested(ADDRESS_FIELDS),
    },
    num_field("balanceDue"),
    str_field("dueDate"),
    Field {
        name: "billingPeriod",
        kind: FieldKind::Nested(BILLING_PERIOD_FIELDS),
    },
    str_field("accountType"),
];

const ITEM_FIELDS: &[Field] = &[
    str_field("sku"),
    str_field("itemName"),
    str_field("description"),
    num_field("cost"),
    num_field("qty"),
];

const ORDER_FIELDS: &[Field] = &[
    str_field("id"),
    str_field("email"),
    str_field("phone"),
    str_field("status"),
    str_field("carrier"),
    str_field("tracking"),
    str_field("trackingLink"),
    str_field("estimatedDelivery"),
    str_field("membershipTier"),
    Field {
        name: "deliveryAddress",
        kind: FieldKind::Nested(ADDRESS_FIELDS),
    },
    Field {
        name: "items",
        kind: FieldKind::List(ITEM_FIELDS),
    },
];

pub static ACCOUNTS: LookupEndpoint = LookupEndpoint {
    realm: "AccountLookup",
    collection: "accounts",
    keys: &[
        LookupKey {
            name: "accountId",
            matcher: KeyMatcher::Exact,
        },
        LookupKey {
            name: "email",
            matcher: KeyMatcher::CaseInsensitive,
        },
        LookupKey {
            name: "phone",
            matcher: KeyMatcher::Phone,
        },
    ],
    shape: ACCOUNT_FIELDS,
    missing_key_message: "Provide one of: phone, email, or accountId",
    not_found_message: "No matching account found",
};

pub static ORDERS: LookupEndpoint = LookupEndpoint {
    realm: "WISMO-Demo",
    collection: "orders",
    keys: &[
        LookupKey {
            name: "id",
            matcher: KeyMatcher::Exact,
        },
        LookupKey {
            name: "email",
            matcher: KeyMatcher::CaseInsensitive,
        },
        LookupKey {
            name: "phone",
            matcher: KeyMatcher::Phone,
        },
    ],
    shape: ORDER_FIELDS,
    missing_key_message: "Provide one of: id, email, or phone",
    not_found_message: "No matching orders",
};
