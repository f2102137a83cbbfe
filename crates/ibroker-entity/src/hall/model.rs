//! Trading hall models.

use crate::catalog_entity;

catalog_entity! {
    /// A trading floor of the exchange.
    pub struct TradingHall {
        pub description: String,
        pub persian_name: String,
    }
    table = "trading_halls",
    label = "trading hall",
    filterable = ["id", "persian_name"],
    create = CreateTradingHall,
    patch = PatchTradingHall,
    response = TradingHallResponse,
}

catalog_entity! {
    /// Link between a commodity group and a trading hall.
    pub struct GroupHall {
        /// Linked commodity group.
        pub group_id: i64,
        /// Linked trading hall.
        pub hall_id: i64,
    }
    table = "group_halls",
    label = "group hall",
    filterable = ["group_id", "hall_id"],
    create = CreateGroupHall,
    patch = PatchGroupHall,
    response = GroupHallResponse,
}

catalog_entity! {
    /// Top-level menu entry of a trading hall.
    pub struct HallMenuGroup {
        pub description: String,
        pub persian_name: String,
        /// Owning trading hall.
        pub trading_hall_id: i64,
    }
    table = "hall_menu_groups",
    label = "hall menu group",
    filterable = ["persian_name", "trading_hall_id"],
    create = CreateHallMenuGroup,
    patch = PatchHallMenuGroup,
    response = HallMenuGroupResponse,
}

catalog_entity! {
    /// Nested menu entry under a hall menu group.
    pub struct HallMenuSubGroup {
        pub description: String,
        pub persian_name: String,
        /// Owning hall menu group.
        pub hall_menu_group_id: i64,
    }
    table = "hall_menu_sub_groups",
    label = "hall menu sub group",
    filterable = ["persian_name", "hall_menu_group_id"],
    create = CreateHallMenuSubGroup,
    patch = PatchHallMenuSubGroup,
    response = HallMenuSubGroupResponse,
}
