/// Use cases module containing application business logic orchestration
mod check_device;

pub use check_device::CheckDeviceUseCase;
