mod errors;
mod free_addr_info;
mod get_addr_info;
mod get_host_by_name;

pub use errors::{
    gai_strerror, AddrInfoError, HostLookupError, EAI_FAIL, EAI_FAMILY, EAI_NONAME, EAI_SERVICE,
    HOST_NOT_FOUND, NO_RECOVERY,
};
pub use free_addr_info::free_addr_info;
pub use get_addr_info::GetAddrInfoUseCase;
pub use get_host_by_name::GetHostByNameUseCase;
