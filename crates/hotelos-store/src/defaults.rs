//! Built-in default data sets.
//!
//! These seed the view model on first run, before the cache has ever been
//! written and before any remote snapshot lands.  Kinds not listed here
//! (laundry issues, wake-up calls, taxis, lost items, inbox) default to
//! empty lists.

use std::collections::BTreeMap;

use chrono::Utc;

use hotelos_shared::entities::*;

pub fn settings() -> UserSettings {
    UserSettings::default()
}

/// Three floors of four rooms each, all vacant and ready.
pub fn rooms() -> Vec<Room> {
    let mut rooms = Vec::with_capacity(12);
    for floor in 1..=3 {
        for n in 1..=4 {
            let number = format!("{floor}0{n}");
            rooms.push(Room {
                id: format!("room-{number}"),
                number,
                floor,
                kind: if n == 4 { "suite" } else { "double" }.to_string(),
                status_front: RoomStatusFront::Vacant,
                status_hk: RoomStatusHk::Ready,
            });
        }
    }
    rooms
}

/// One general channel with a system welcome message.
pub fn channels() -> Vec<ChatChannel> {
    let now = Utc::now();
    vec![ChatChannel {
        id: "ch-general".to_string(),
        kind: ChannelKind::Group,
        name: "Général".to_string(),
        participants: Vec::new(),
        messages: vec![ChatMessage {
            id: "msg-welcome".to_string(),
            sender_id: "system".to_string(),
            sender_name: "HotelOS".to_string(),
            text: "Bienvenue sur la messagerie interne.".to_string(),
            timestamp: now,
            is_system: Some(true),
            attachments: None,
            reactions: None,
        }],
        unread_count: 0,
        last_update: now,
        is_online: None,
        last_message: Some("Bienvenue sur la messagerie interne.".to_string()),
    }]
}

pub fn business_config() -> BusinessConfig {
    BusinessConfig {
        company_name: "Hôtel Les Tilleuls".to_string(),
        address: "12 rue des Tilleuls, 75011 Paris".to_string(),
        phone: "+33 1 40 00 00 00".to_string(),
        email: "contact@lestilleuls.example".to_string(),
        ..BusinessConfig::default()
    }
}

pub fn venues() -> Vec<Venue> {
    vec![
        Venue {
            id: "venue-salon".to_string(),
            name: "Salon Madeleine".to_string(),
            capacity: 40,
            kind: "Salle de réunion".to_string(),
        },
        Venue {
            id: "venue-terrasse".to_string(),
            name: "Terrasse".to_string(),
            capacity: 60,
            kind: "Extérieur".to_string(),
        },
    ]
}

pub fn catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: "cat-je".to_string(),
            name: "Journée d'étude".to_string(),
            default_price: 65.0,
            default_vat: 10.0,
            technical_description: None,
            default_venue_id: Some("venue-salon".to_string()),
            default_start_time: Some("09:00".to_string()),
            default_end_time: Some("17:30".to_string()),
        },
        CatalogItem {
            id: "cat-pause".to_string(),
            name: "Pause café".to_string(),
            default_price: 8.5,
            default_vat: 10.0,
            technical_description: None,
            default_venue_id: None,
            default_start_time: None,
            default_end_time: None,
        },
    ]
}

pub fn contacts() -> Vec<Contact> {
    vec![Contact {
        id: "contact-blanchisserie".to_string(),
        name: "Blanchisserie Lavoix".to_string(),
        role: "Fournisseur".to_string(),
        company: Some("Lavoix SARL".to_string()),
        category: Some("Fournisseur".to_string()),
        phone: "+33 1 40 00 00 01".to_string(),
        email: "contact@lavoix.example".to_string(),
        address: None,
        avatar: None,
        initials: Some("BL".to_string()),
        color: Some("indigo".to_string()),
        vip: None,
        status: None,
        owner_id: None,
    }]
}

pub fn todos() -> Vec<Task> {
    vec![Task {
        id: "task-briefing".to_string(),
        text: "Briefing équipe du matin".to_string(),
        done: false,
        tag: "Général".to_string(),
        date: None,
        time: Some("08:30".to_string()),
        priority: Some(TaskPriority::Medium),
        note: None,
        linked_contact_id: None,
        linked_group_id: None,
        attachments: None,
        owner_id: None,
        status: TaskStatus::NotStarted,
    }]
}

pub fn events() -> Vec<CalendarEvent> {
    vec![CalendarEvent {
        id: "ev-revenue".to_string(),
        title: "Point revenue management".to_string(),
        start: Utc::now(),
        time: "11:00".to_string(),
        duration: "1h".to_string(),
        kind: EventKind::Pro,
        linked_contact_id: None,
        video_link: None,
        owner_id: None,
    }]
}

pub fn groups() -> Vec<Group> {
    vec![Group {
        id: "group-acme".to_string(),
        name: "Séminaire Acme".to_string(),
        client_id: None,
        category: "Séminaire".to_string(),
        status: GroupStatus::Option,
        start_date: "2026-09-14".to_string(),
        end_date: "2026-09-16".to_string(),
        nights: 2,
        pax: 18,
        rooms: GroupRooms {
            single: 10,
            twin: 4,
            double: 0,
            family: 0,
        },
        options: GroupOptions {
            je: true,
            dinner: true,
            ..GroupOptions::default()
        },
        note: None,
        rm_contact_id: None,
        invoice_items: None,
        payment_schedule: None,
        created_at: Some(Utc::now()),
    }]
}

pub fn clients() -> Vec<Client> {
    vec![Client {
        id: "client-acme".to_string(),
        name: "Acme SAS".to_string(),
        kind: ClientType::Entreprise,
        email: "compta@acme.example".to_string(),
        phone: "+33 1 40 00 00 02".to_string(),
        address: "1 avenue de l'Opéra, 75001 Paris".to_string(),
        siret: None,
        company_name: Some("Acme SAS".to_string()),
        category: None,
        vat: None,
        notes: None,
        created_at: Utc::now(),
    }]
}

pub fn inventory() -> BTreeMap<String, MonthlyInventory> {
    BTreeMap::new()
}

pub fn recipes() -> Vec<Recipe> {
    vec![Recipe {
        id: "recipe-risotto".to_string(),
        name: "Risotto aux champignons".to_string(),
        category: "Plat".to_string(),
        portions: 4,
        target_cost_percent: 28.0,
        vat_rate: 10.0,
        last_updated: "2026-01-05".to_string(),
        ingredients: vec![RecipeIngredient {
            id: "ing-riz".to_string(),
            inventory_item_id: None,
            name: "Riz arborio".to_string(),
            unit: "kg".to_string(),
            unit_price: 4.2,
            quantity: 0.4,
            supplier: None,
        }],
    }]
}

pub fn ratio_items() -> Vec<RatioItem> {
    vec![RatioItem {
        id: "ratio-petit-dej".to_string(),
        name: "Petit déjeuner buffet".to_string(),
        category: "Petit Déjeuner".to_string(),
        manual_cost: 3.8,
        target_percent: 25.0,
        vat_rate: 10.0,
        inventory_id: None,
    }]
}

pub fn ratio_categories() -> Vec<String> {
    vec![
        "Cuisine".to_string(),
        "Petit Déjeuner".to_string(),
        "Boissons sans alcool".to_string(),
        "Boissons avec alcool".to_string(),
    ]
}

pub fn tickets() -> Vec<MaintenanceTicket> {
    vec![MaintenanceTicket {
        id: "ticket-vmc".to_string(),
        location: "Technique".to_string(),
        description: "VMC bruyante au 2e étage".to_string(),
        status: MaintenanceStatus::Open,
        created_at: Utc::now(),
        photo_url: None,
    }]
}

pub fn contracts() -> Vec<MaintenanceContract> {
    vec![MaintenanceContract {
        id: "contract-ascenseur".to_string(),
        provider_name: "Ascenseurs Réunis".to_string(),
        subject: "Maintenance ascenseur".to_string(),
        contact_phone: "+33 1 40 00 00 03".to_string(),
        contact_email: "sav@ascenseurs.example".to_string(),
        status: ContractStatus::Active,
        last_intervention: None,
        next_intervention: None,
        address: None,
        website: None,
        siret: None,
        sales_contact: None,
        technical_contact: None,
        start_date: None,
        end_date: None,
        frequency: Some("Trimestrielle".to_string()),
        annual_cost: Some(2400.0),
    }]
}

pub fn leads() -> Vec<Lead> {
    vec![Lead {
        id: "lead-mariage-durand".to_string(),
        group_name: "Mariage Durand".to_string(),
        contact_name: "C. Durand".to_string(),
        email: "c.durand@example.net".to_string(),
        phone: "+33 6 00 00 00 00".to_string(),
        request_date: "2026-07-28".to_string(),
        start_date: None,
        end_date: None,
        event_date: Some("2027-06-12".to_string()),
        pax: 80,
        note: "Demande de devis dîner + hébergement.".to_string(),
        status: LeadStatus::Nouveau,
        checklist: LeadChecklist::default(),
        owner_id: None,
    }]
}

pub fn logs() -> Vec<LogEntry> {
    vec![LogEntry {
        id: "log-consignes".to_string(),
        author: "Direction".to_string(),
        message: "Pensez à consigner chaque passation dans le cahier.".to_string(),
        priority: LogPriority::Info,
        target: LogTarget::All,
        status: LogStatus::Active,
        timestamp: Utc::now(),
        read_by: Vec::new(),
    }]
}

pub fn spa_requests() -> Vec<SpaRequest> {
    vec![SpaRequest {
        id: "spa-massage".to_string(),
        client_name: "Mme Ferre".to_string(),
        phone: "+33 6 00 00 00 01".to_string(),
        email: "a.ferre@example.net".to_string(),
        date: "2026-08-09".to_string(),
        time: "15:00".to_string(),
        treatment: "Massage suédois 50min".to_string(),
        status: SpaStatus::Pending,
        refusal_reason: None,
        created_at: Utc::now(),
    }]
}
