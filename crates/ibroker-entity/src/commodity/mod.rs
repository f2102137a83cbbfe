//! Commodity taxonomy: commodities and their group hierarchy.

pub mod model;

pub use model::{
    Commodity, CommodityResponse, CreateCommodity, CreateGroup, CreateMainGroup, CreateSubGroup,
    Group, GroupResponse, MainGroup, MainGroupResponse, PatchCommodity, PatchGroup,
    PatchMainGroup, PatchSubGroup, SubGroup, SubGroupResponse,
};
