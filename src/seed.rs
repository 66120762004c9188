//! Datos de ejemplo
//!
//! Colecciones con las que arranca la consola. Las fechas son literales fijos.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::models::support::{FaqCategory, FaqItem, SupportTicket, TicketPriority, TicketStatus};
use crate::models::{
    ComplianceItem, ComplianceStatus, Driver, DriverStatus, FuelRecord, MaintenanceRecord, MaintenanceStatus,
    MaintenanceType, Notification, NotificationType, Part, Supplier, Trip, TripStatus, User, UserRole, UserStatus,
    Vehicle, VehicleStatus,
};

fn at(value: &str) -> DateTime<Utc> {
    value.parse().unwrap_or_default()
}

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap_or_default()
}

fn text(value: &str) -> String {
    value.to_string()
}

pub fn vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: text("1"),
            make: text("Ford"),
            model: text("Transit"),
            year: 2022,
            vin: text("WBA3A5G59DNP26082"),
            status: VehicleStatus::Active,
            driver: Some(text("John Doe")),
            mileage: 45000,
        },
        Vehicle {
            id: text("2"),
            make: text("Mercedes"),
            model: text("Sprinter"),
            year: 2021,
            vin: text("WBA3A5G59DNP26083"),
            status: VehicleStatus::Maintenance,
            driver: None,
            mileage: 62000,
        },
        Vehicle {
            id: text("3"),
            make: text("Isuzu"),
            model: text("NPR"),
            year: 2023,
            vin: text("WBA3A5G59DNP26084"),
            status: VehicleStatus::Active,
            driver: Some(text("Jane Smith")),
            mileage: 23000,
        },
    ]
}

pub fn drivers() -> Vec<Driver> {
    vec![
        Driver {
            id: text("1"),
            name: text("John Doe"),
            license: text("DL123456789"),
            phone: text("+1-555-0123"),
            status: DriverStatus::Active,
            assigned_vehicle: Some(text("1")),
        },
        Driver {
            id: text("2"),
            name: text("Jane Smith"),
            license: text("DL987654321"),
            phone: text("+1-555-0124"),
            status: DriverStatus::Active,
            assigned_vehicle: Some(text("3")),
        },
        Driver {
            id: text("3"),
            name: text("Mike Johnson"),
            license: text("DL456789123"),
            phone: text("+1-555-0125"),
            status: DriverStatus::Inactive,
            assigned_vehicle: None,
        },
    ]
}

pub fn trips() -> Vec<Trip> {
    let trip = |id: &str, vehicle_id: &str, driver_id: &str, route: (&str, &str), status, start: &str, distance| Trip {
        id: text(id),
        vehicle_id: text(vehicle_id),
        driver_id: text(driver_id),
        origin: text(route.0),
        destination: text(route.1),
        status,
        start_time: at(start),
        distance,
    };

    vec![
        trip("1", "1", "1", ("New York", "Boston"), TripStatus::Active, "2024-01-15T08:00:00Z", 215.0),
        trip("2", "3", "2", ("Chicago", "Detroit"), TripStatus::Completed, "2024-01-14T10:30:00Z", 283.0),
        trip("3", "1", "1", ("Los Angeles", "San Diego"), TripStatus::Scheduled, "2024-01-16T09:00:00Z", 120.0),
    ]
}

pub fn parts() -> Vec<Part> {
    vec![
        Part {
            id: text("P001"),
            name: text("Oil Filter"),
            part_number: text("OF-123456"),
            category: text("Filters"),
            quantity: 32,
            min_quantity: 10,
            supplier: text("AutoParts Inc"),
            unit_price: Decimal::new(899, 2),
            location: text("Shelf A3"),
            last_ordered: date("2024-01-05"),
        },
        Part {
            id: text("P002"),
            name: text("Brake Pad Set"),
            part_number: text("BP-789012"),
            category: text("Brakes"),
            quantity: 8,
            min_quantity: 5,
            supplier: text("BrakeMasters Co"),
            unit_price: Decimal::new(4550, 2),
            location: text("Shelf B2"),
            last_ordered: date("2024-01-12"),
        },
    ]
}

pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: text("S001"),
            name: text("AutoParts Inc"),
            contact: text("John Supplier"),
            email: text("john@autoparts.com"),
            phone: text("555-123-4567"),
            address: text("123 Parts St, Autoville"),
            rating: 4.5,
        },
        Supplier {
            id: text("S002"),
            name: text("BrakeMasters Co"),
            contact: text("Sarah Supplier"),
            email: text("sarah@brakemasters.com"),
            phone: text("555-987-6543"),
            address: text("456 Brake Ave, Partstown"),
            rating: 4.2,
        },
    ]
}

pub fn maintenance_records() -> Vec<MaintenanceRecord> {
    vec![
        MaintenanceRecord {
            id: text("1"),
            vehicle_id: text("1"),
            kind: MaintenanceType::Scheduled,
            description: text("Oil Change & Filter Replacement"),
            status: MaintenanceStatus::Pending,
            scheduled_date: at("2024-01-20T09:00:00Z"),
            completed_date: None,
            cost: Some(Decimal::from(85)),
            mileage: 45000,
            notes: None,
        },
        MaintenanceRecord {
            id: text("2"),
            vehicle_id: text("2"),
            kind: MaintenanceType::Repair,
            description: text("Brake Pad Replacement"),
            status: MaintenanceStatus::InProgress,
            scheduled_date: at("2024-01-18T10:00:00Z"),
            completed_date: None,
            cost: Some(Decimal::from(320)),
            mileage: 62000,
            notes: Some(text("Front brake pads worn down to 2mm")),
        },
        MaintenanceRecord {
            id: text("3"),
            vehicle_id: text("3"),
            kind: MaintenanceType::Inspection,
            description: text("Annual Safety Inspection"),
            status: MaintenanceStatus::Completed,
            scheduled_date: at("2024-01-15T14:00:00Z"),
            completed_date: Some(at("2024-01-15T16:30:00Z")),
            cost: Some(Decimal::from(120)),
            mileage: 23000,
            notes: None,
        },
        MaintenanceRecord {
            id: text("4"),
            vehicle_id: text("1"),
            kind: MaintenanceType::Scheduled,
            description: text("Tire Rotation"),
            status: MaintenanceStatus::Overdue,
            scheduled_date: at("2024-01-10T11:00:00Z"),
            completed_date: None,
            cost: Some(Decimal::from(60)),
            mileage: 44500,
            notes: None,
        },
    ]
}

pub fn fuel_records() -> Vec<FuelRecord> {
    let record = |id: &str, vehicle_id: &str, when: &str, gallons, cost, odometer, location: &str, fuel: &str| {
        FuelRecord {
            id: text(id),
            vehicle_id: text(vehicle_id),
            date: at(when),
            gallons,
            cost,
            odometer,
            location: text(location),
            fuel_type: text(fuel),
        }
    };

    vec![
        record("1", "1", "2024-01-15T10:30:00Z", 25.5, Decimal::new(8925, 2), 45000, "Shell Station - Main St", "Diesel"),
        record("2", "2", "2024-01-14T15:45:00Z", 32.0, Decimal::new(11200, 2), 62000, "BP Station - Highway 101", "Diesel"),
        record("3", "3", "2024-01-13T09:15:00Z", 18.7, Decimal::new(6545, 2), 23000, "Exxon - Downtown", "Gasoline"),
    ]
}

pub fn compliance_items() -> Vec<ComplianceItem> {
    let item = |id: &str, name: &str, kind: &str, status, expires: Option<&str>| ComplianceItem {
        id: text(id),
        name: text(name),
        kind: text(kind),
        status,
        expiration_date: expires.map(date),
        document_url: None,
    };

    vec![
        item("1", "Vehicle Registration - Ford Transit", "registration", ComplianceStatus::Compliant, Some("2024-12-15")),
        item("2", "Driver License - John Doe", "license", ComplianceStatus::Expiring, Some("2024-02-10")),
        item("3", "Insurance Certificate", "insurance", ComplianceStatus::Compliant, Some("2024-09-22")),
        item("4", "DOT Inspection - Mercedes Sprinter", "inspection", ComplianceStatus::NonCompliant, Some("2023-12-30")),
        item("5", "Maintenance Records - Isuzu NPR", "maintenance", ComplianceStatus::Pending, None),
        item("6", "Driver Hours Compliance", "hours", ComplianceStatus::Compliant, None),
        item("7", "Emission Test - Ford Transit", "emission", ComplianceStatus::Expiring, Some("2024-02-28")),
        item("8", "Insurance Certificate - Cargo", "insurance", ComplianceStatus::Compliant, Some("2024-11-15")),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let notification = |id: &str, title: &str, message: &str, kind, when: &str, read| Notification {
        id: text(id),
        title: text(title),
        message: text(message),
        kind,
        timestamp: at(when),
        read,
    };

    vec![
        notification(
            "1",
            "Vehicle Maintenance Required",
            "Ford Transit (VIN: WBA3A5G59DNP26082) is due for scheduled maintenance.",
            NotificationType::Alert,
            "2024-01-15T10:30:00Z",
            false,
        ),
        notification(
            "2",
            "Driver License Expiring",
            "John Doe's driver license will expire in 15 days.",
            NotificationType::Reminder,
            "2024-01-14T09:45:00Z",
            false,
        ),
        notification(
            "3",
            "Trip Completed",
            "Trip #283 has been successfully completed.",
            NotificationType::Success,
            "2024-01-14T08:20:00Z",
            true,
        ),
        notification(
            "4",
            "New Driver Assigned",
            "Jane Smith has been assigned to vehicle Mercedes Sprinter.",
            NotificationType::Info,
            "2024-01-13T16:15:00Z",
            true,
        ),
        notification(
            "5",
            "Fuel Level Low",
            "Isuzu NPR is running low on fuel (15% remaining).",
            NotificationType::Alert,
            "2024-01-13T15:10:00Z",
            false,
        ),
        notification(
            "6",
            "Insurance Renewal",
            "Fleet insurance policy will expire in 30 days.",
            NotificationType::Reminder,
            "2024-01-12T11:25:00Z",
            true,
        ),
    ]
}

pub fn users() -> Vec<User> {
    let user = |id: &str, name: &str, email: &str, role, status, phone: &str, last_login: &str| User {
        id: text(id),
        name: text(name),
        email: text(email),
        role,
        status,
        phone: text(phone),
        last_login: at(last_login),
    };

    vec![
        user("1", "John Doe", "john.doe@fleetpro.com", UserRole::Administrator, UserStatus::Active, "+1-555-0123", "2024-01-15T09:30:00Z"),
        user("2", "Jane Smith", "jane.smith@fleetpro.com", UserRole::Manager, UserStatus::Active, "+1-555-0124", "2024-01-14T16:45:00Z"),
        user("3", "Mike Johnson", "mike.johnson@fleetpro.com", UserRole::Dispatcher, UserStatus::Active, "+1-555-0125", "2024-01-15T08:15:00Z"),
        user("4", "Sarah Williams", "sarah.williams@fleetpro.com", UserRole::Driver, UserStatus::Active, "+1-555-0126", "2024-01-13T11:20:00Z"),
        user("5", "David Brown", "david.brown@fleetpro.com", UserRole::Maintenance, UserStatus::Active, "+1-555-0127", "2024-01-14T14:10:00Z"),
        user("6", "Emily Davis", "emily.davis@fleetpro.com", UserRole::Manager, UserStatus::Inactive, "+1-555-0128", "2023-12-28T10:05:00Z"),
    ]
}

pub fn faqs() -> Vec<FaqItem> {
    let faq = |id: &str, question: &str, answer: &str, category| FaqItem {
        id: text(id),
        question: text(question),
        answer: text(answer),
        category,
    };

    vec![
        faq(
            "1",
            "How do I add a new vehicle to the fleet?",
            "To add a new vehicle, navigate to the Fleet Management page, click on \"Add Vehicle\" button, and fill out the required information including make, model, VIN, and year. Once submitted, the vehicle will be added to your fleet inventory.",
            FaqCategory::General,
        ),
        faq(
            "2",
            "How do I assign a driver to a vehicle?",
            "On the Drivers page, find the driver you want to assign, click \"Edit\" or the three-dot menu next to their name. Select \"Assign Vehicle\" from the dropdown and choose the desired vehicle from the list of available vehicles.",
            FaqCategory::General,
        ),
        faq(
            "3",
            "How do I reset my password?",
            "Click on the \"Forgot Password\" link on the login page. Enter your email address and follow the instructions sent to your email to create a new password. If you're already logged in, you can change your password in the Settings > Security section.",
            FaqCategory::Account,
        ),
        faq(
            "4",
            "What browsers are supported by FleetPro?",
            "FleetPro works best with modern browsers such as Google Chrome, Mozilla Firefox, Microsoft Edge, and Safari (latest versions). Internet Explorer is not fully supported and may result in degraded functionality.",
            FaqCategory::Technical,
        ),
        faq(
            "5",
            "How do I upgrade my subscription plan?",
            "Go to Settings > Billing and click on \"Change Plan\". You'll see a comparison of available plans. Select your desired plan and follow the payment instructions to complete the upgrade.",
            FaqCategory::Billing,
        ),
        faq(
            "6",
            "How do I generate reports for specific time periods?",
            "Navigate to the Reports & Analytics section, select the report type you want to generate, and use the date range picker to specify your desired time period. Click \"Generate Report\" to create the report based on your selections.",
            FaqCategory::General,
        ),
    ]
}

pub fn tickets() -> Vec<SupportTicket> {
    let ticket = |id: &str, title: &str, status, priority, created: &str, last_update: &str| SupportTicket {
        id: text(id),
        title: text(title),
        status,
        priority,
        created: at(created),
        last_update: at(last_update),
    };

    vec![
        ticket("T-1001", "Cannot access maintenance history", TicketStatus::Open, TicketPriority::High, "2024-01-14T09:30:00Z", "2024-01-14T09:30:00Z"),
        ticket("T-1002", "Need help setting up driver alerts", TicketStatus::InProgress, TicketPriority::Medium, "2024-01-13T14:45:00Z", "2024-01-14T10:15:00Z"),
        ticket("T-1003", "Billing inquiry about last invoice", TicketStatus::Resolved, TicketPriority::Low, "2024-01-12T11:20:00Z", "2024-01-13T16:30:00Z"),
    ]
}
