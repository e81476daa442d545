//! In-memory entity collections backed by the record store
//!
//! All four collections are append-only. Every create writes the whole
//! affected collection back to disk before returning.

use crate::core::entity::Entity;
use crate::core::resolve;
use crate::core::store::{RecordStore, StoreError};
use crate::entities::{Customer, Order, Product, Vendor};

/// Record counts per collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    pub customers: usize,
    pub vendors: usize,
    pub products: usize,
    pub orders: usize,
}

/// Owner of the four entity collections
#[derive(Debug)]
pub struct Repository {
    store: RecordStore,
    customers: Vec<Customer>,
    vendors: Vec<Vendor>,
    products: Vec<Product>,
    orders: Vec<Order>,
}

impl Repository {
    /// Load every collection from the store
    pub fn open(store: RecordStore) -> Result<Self, StoreError> {
        let customers = store.load(Customer::COLLECTION)?;
        let vendors = store.load(Vendor::COLLECTION)?;
        let products = store.load(Product::COLLECTION)?;
        let orders = store.load(Order::COLLECTION)?;

        Ok(Self {
            store,
            customers,
            vendors,
            products,
            orders,
        })
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn customer_names(&self) -> Vec<String> {
        resolve::names(&self.customers)
    }

    pub fn vendor_names(&self) -> Vec<String> {
        resolve::names(&self.vendors)
    }

    pub fn product_names(&self) -> Vec<String> {
        resolve::names(&self.products)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            customers: self.customers.len(),
            vendors: self.vendors.len(),
            products: self.products.len(),
            orders: self.orders.len(),
        }
    }

    /// Add a customer and persist the customer collection
    pub fn add_customer(&mut self, name: &str, email: &str) -> Result<&Customer, StoreError> {
        append(&self.store, &mut self.customers, Customer::new(name, email))
    }

    /// Add a vendor and persist the vendor collection
    pub fn add_vendor(&mut self, name: &str, contact: &str) -> Result<&Vendor, StoreError> {
        append(&self.store, &mut self.vendors, Vendor::new(name, contact))
    }

    /// Add a product; `vendor_id` is stored as given, never checked
    pub fn add_product(&mut self, name: &str, vendor_id: &str) -> Result<&Product, StoreError> {
        append(&self.store, &mut self.products, Product::new(name, vendor_id))
    }

    /// Add an order stamped with the current time; ids are stored as given
    pub fn add_order(
        &mut self,
        customer_id: &str,
        product_id: &str,
    ) -> Result<&Order, StoreError> {
        append(&self.store, &mut self.orders, Order::new(customer_id, product_id))
    }

    /// Add a product for the first vendor named `vendor_name`
    ///
    /// Returns `Ok(None)` and creates nothing when no vendor has that name.
    pub fn add_product_for_vendor(
        &mut self,
        name: &str,
        vendor_name: &str,
    ) -> Result<Option<&Product>, StoreError> {
        let Some(vendor_id) = resolve::resolve_id(&self.vendors, vendor_name) else {
            tracing::debug!(vendor = vendor_name, "vendor not found, product not created");
            return Ok(None);
        };
        let vendor_id = vendor_id.to_string();
        self.add_product(name, &vendor_id).map(Some)
    }

    /// Add an order from a customer name and a product name
    ///
    /// Returns `Ok(None)` and creates nothing unless both names resolve.
    pub fn add_order_for(
        &mut self,
        customer_name: &str,
        product_name: &str,
    ) -> Result<Option<&Order>, StoreError> {
        let customer_id = resolve::resolve_id(&self.customers, customer_name);
        let product_id = resolve::resolve_id(&self.products, product_name);
        let (Some(customer_id), Some(product_id)) = (customer_id, product_id) else {
            tracing::debug!(
                customer = customer_name,
                product = product_name,
                "customer or product not found, order not created"
            );
            return Ok(None);
        };
        let (customer_id, product_id) = (customer_id.to_string(), product_id.to_string());
        self.add_order(&customer_id, &product_id).map(Some)
    }
}

fn append<'a, T: Entity>(
    store: &RecordStore,
    records: &'a mut Vec<T>,
    record: T,
) -> Result<&'a T, StoreError> {
    records.push(record);
    if let Err(err) = store.save(T::COLLECTION, records) {
        records.pop();
        return Err(err);
    }

    let created = &records[records.len() - 1];
    tracing::info!(kind = T::LABEL, id = created.id(), "created record");
    Ok(created)
}
