//! Commodity and commodity group models.
//!
//! Groups form a three-level tree: main group, group, sub group.

use crate::catalog_entity;

catalog_entity! {
    /// A tradable commodity. Commodities nest through `parent_id`.
    pub struct Commodity {
        /// Free-text description.
        pub description: String,
        /// Parent commodity, 0 for a root.
        pub parent_id: i64,
        /// Display name.
        pub persian_name: String,
        /// Ticker symbol.
        pub symbol: String,
    }
    table = "commodities",
    label = "commodity",
    filterable = ["parent_id", "persian_name", "symbol"],
    create = CreateCommodity,
    patch = PatchCommodity,
    response = CommodityResponse,
}

catalog_entity! {
    /// Top level of the commodity menu.
    pub struct MainGroup {
        pub description: String,
        pub persian_name: String,
    }
    table = "main_groups",
    label = "main group",
    filterable = ["id", "persian_name"],
    create = CreateMainGroup,
    patch = PatchMainGroup,
    response = MainGroupResponse,
}

catalog_entity! {
    /// Second level of the commodity menu.
    pub struct Group {
        pub description: String,
        pub persian_name: String,
        /// Owning main group.
        pub main_group_id: i64,
    }
    table = "groups",
    label = "group",
    filterable = ["persian_name", "main_group_id"],
    create = CreateGroup,
    patch = PatchGroup,
    response = GroupResponse,
}

catalog_entity! {
    /// Third level of the commodity menu.
    pub struct SubGroup {
        pub description: String,
        pub persian_name: String,
        /// Owning group.
        pub group_id: i64,
    }
    table = "sub_groups",
    label = "sub group",
    filterable = ["persian_name", "group_id"],
    create = CreateSubGroup,
    patch = PatchSubGroup,
    response = SubGroupResponse,
}
