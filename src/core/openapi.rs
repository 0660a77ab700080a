use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::donations::{dtos as donations_dtos, handlers as donations_handlers};
use crate::features::fundraisers::{dtos as fundraisers_dtos, handlers as fundraisers_handlers};
use crate::shared::types::Meta;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Categories
        categories_handlers::list_categories,
        // Fundraisers
        fundraisers_handlers::get_fundraiser,
        fundraisers_handlers::create_fundraiser,
        fundraisers_handlers::update_fundraiser,
        fundraisers_handlers::delete_fundraiser,
        // Donations
        donations_handlers::create_donation,
    ),
    components(
        schemas(
            Meta,
            categories_dtos::CategoryResponseDto,
            fundraisers_dtos::CreateFundraiserDto,
            fundraisers_dtos::UpdateFundraiserDto,
            fundraisers_dtos::FundraiserCreatedDto,
            fundraisers_dtos::FundraiserDetailDto,
            donations_dtos::CreateDonationDto,
            donations_dtos::DonationCreatedDto,
            donations_dtos::DonationResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Fundraiser categories (read-only)"),
        (name = "fundraisers", description = "Fundraiser campaigns"),
        (name = "donations", description = "Donation ledger")
    )
)]
pub struct ApiDoc;

pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
