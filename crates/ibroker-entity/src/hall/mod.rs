//! Trading halls and their menus.

pub mod model;

pub use model::{
    CreateGroupHall, CreateHallMenuGroup, CreateHallMenuSubGroup, CreateTradingHall, GroupHall,
    GroupHallResponse, HallMenuGroup, HallMenuGroupResponse, HallMenuSubGroup,
    HallMenuSubGroupResponse, PatchGroupHall, PatchHallMenuGroup, PatchHallMenuSubGroup,
    PatchTradingHall, TradingHall, TradingHallResponse,
};
