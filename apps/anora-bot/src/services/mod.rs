pub mod entitlement_service;
