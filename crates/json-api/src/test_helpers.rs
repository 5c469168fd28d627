//! Test helpers.

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
    sync::Arc,
};

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use sqlx::error::{DatabaseError, ErrorKind};

use dairycart_app::{
    context::AppContext,
    domain::{
        attributes::{
            MockAttributesService,
            data::Attribute,
            records::{AttributeId, AttributeRecord, AttributeValueId, AttributeValueRecord},
        },
        discounts::{
            MockDiscountsService,
            records::{DiscountId, DiscountRecord, DiscountType},
        },
        products::{
            MockProductsService,
            data::Product,
            records::{ProductId, ProductRecord},
        },
        progenitors::{
            MockProgenitorsService,
            records::{Dimensions, ProgenitorId, ProgenitorRecord},
        },
    },
};

use crate::state::State;

/// Mocks without expectations: any call panics.
fn strict_app() -> AppContext {
    AppContext {
        products: Arc::new(MockProductsService::new()),
        progenitors: Arc::new(MockProgenitorsService::new()),
        attributes: Arc::new(MockAttributesService::new()),
        discounts: Arc::new(MockDiscountsService::new()),
    }
}

fn service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(products),
            ..strict_app()
        },
        route,
    )
}

pub(crate) fn progenitors_service(progenitors: MockProgenitorsService, route: Router) -> Service {
    service(
        AppContext {
            progenitors: Arc::new(progenitors),
            ..strict_app()
        },
        route,
    )
}

pub(crate) fn attributes_service(attributes: MockAttributesService, route: Router) -> Service {
    service(
        AppContext {
            attributes: Arc::new(attributes),
            ..strict_app()
        },
        route,
    )
}

pub(crate) fn discounts_service(discounts: MockDiscountsService, route: Router) -> Service {
    service(
        AppContext {
            discounts: Arc::new(discounts),
            ..strict_app()
        },
        route,
    )
}

pub(crate) fn make_progenitor(id: i64) -> ProgenitorRecord {
    ProgenitorRecord {
        id: ProgenitorId::from_i64(id),
        name: "Skateboard".to_owned(),
        description: "Four wheels and a deck".to_owned(),
        taxable: true,
        price: 99.99,
        product_dimensions: Dimensions {
            weight: 2.5,
            height: 0.5,
            width: 8.0,
            length: 32.0,
        },
        package_dimensions: Dimensions {
            weight: 3.0,
            height: 1.0,
            width: 9.0,
            length: 34.0,
        },
        created_on: Timestamp::UNIX_EPOCH,
        updated_on: None,
        archived_on: None,
    }
}

pub(crate) fn make_value(id: i64, attribute: i64, value: &str) -> AttributeValueRecord {
    AttributeValueRecord {
        id: AttributeValueId::from_i64(id),
        attribute_id: AttributeId::from_i64(attribute),
        value: value.to_owned(),
        created_on: Timestamp::UNIX_EPOCH,
        updated_on: None,
        archived_on: None,
    }
}

pub(crate) fn make_product(sku: &str) -> Product {
    let progenitor = make_progenitor(1);

    Product {
        record: ProductRecord {
            id: ProductId::from_i64(10),
            progenitor_id: progenitor.id,
            sku: sku.to_owned(),
            name: "Skateboard".to_owned(),
            upc: None,
            quantity: 12,
            price: 99.99,
            cost: 45.5,
            created_on: Timestamp::UNIX_EPOCH,
            updated_on: None,
            archived_on: None,
        },
        progenitor,
        attributes: vec![Attribute {
            record: AttributeRecord {
                id: AttributeId::from_i64(3),
                progenitor_id: ProgenitorId::from_i64(1),
                name: "color".to_owned(),
                created_on: Timestamp::UNIX_EPOCH,
                updated_on: None,
                archived_on: None,
            },
            values: vec![make_value(4, 3, "red"), make_value(5, 3, "blue")],
        }],
    }
}

pub(crate) fn make_discount(id: i64) -> DiscountRecord {
    DiscountRecord {
        id: DiscountId::from_i64(id),
        name: "Summer sale".to_owned(),
        discount_type: DiscountType::Percentage,
        amount: 12.5,
        product_id: None,
        starts_on: Timestamp::UNIX_EPOCH,
        expires_on: None,
        redemption_code: None,
        max_uses: None,
        login_required: false,
        created_on: Timestamp::UNIX_EPOCH,
        updated_on: None,
        archived_on: None,
    }
}

/// Driver error reporting a unique constraint violation.
#[derive(Debug)]
struct UniqueViolation;

impl Display for UniqueViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("duplicate key value violates unique constraint")
    }
}

impl Error for UniqueViolation {}

impl DatabaseError for UniqueViolation {
    fn message(&self) -> &str {
        "duplicate key value violates unique constraint"
    }

    fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn Error + Send + Sync + 'static> {
        self
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::UniqueViolation
    }
}

pub(crate) fn unique_violation() -> sqlx::Error {
    sqlx::Error::Database(Box::new(UniqueViolation))
}
