pub mod resolve;

pub use resolve::{
    free_addr_info, gai_strerror, AddrInfoError, GetAddrInfoUseCase, GetHostByNameUseCase,
    HostLookupError,
};
