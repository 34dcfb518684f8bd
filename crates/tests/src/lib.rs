#[cfg(test)]
mod common;

#[cfg(test)]
mod document_get_tests;

#[cfg(test)]
mod document_create_tests;

#[cfg(test)]
mod document_list_tests;

#[cfg(test)]
mod signature_order_tests;

#[cfg(test)]
mod sign_document_tests;

#[cfg(test)]
mod user_account_tests;

#[cfg(test)]
mod session_token_tests;
