use super::{QuestionKind, QuestionSection, QuestionSpec};
use super::QuestionSection::*;

const fn free_text(
    id: &'static str,
    prompt: &'static str,
    section: QuestionSection,
) -> QuestionSpec {
    QuestionSpec::new(id, prompt, QuestionKind::FreeText, section, &[])
}

const fn integer(
    id: &'static str,
    prompt: &'static str,
    section: QuestionSection,
) -> QuestionSpec {
    QuestionSpec::new(id, prompt, QuestionKind::Integer, section, &[])
}

const fn choice(
    id: &'static str,
    prompt: &'static str,
    section: QuestionSection,
    options: &'static [&'static str],
) -> QuestionSpec {
    QuestionSpec::new(id, prompt, QuestionKind::SingleChoice, section, options)
}

const fn multi_choice(
    id: &'static str,
    prompt: &'static str,
    section: QuestionSection,
    options: &'static [&'static str],
) -> QuestionSpec {
    QuestionSpec::new(id, prompt, QuestionKind::MultiChoice, section, options)
}

/// The questionnaire in asking order. Visibility predicates only point backwards.
pub(super) static CATALOG: &[QuestionSpec] = &[
    // Demographics
    free_text("demographics_name", "Hello! What is your name?", Demographics),
    integer("demographics_age", "What is your age?", Demographics),
    choice(
        "demographics_gender",
        "Which gender were you assigned at birth?",
        Demographics,
        &["Male", "Female"],
    ),
    choice(
        "demographics_pregnant",
        "Are you pregnant, or do you plan on being pregnant?",
        Demographics,
        &["Yes", "No"],
    )
    .ask_if(&[("demographics_gender", "Female")]),
    // Symptom Characterisation
    choice(
        "symptom_type",
        "What type of discomfort do you most often experience in your chest or upper abdomen?",
        Symptoms,
        &[
            "Burning sensation",
            "Sharp/stabbing pain",
            "Pressure or tightness",
            "Fullness or bloating",
            "Sour or bitter taste in the mouth",
            "Pain radiating to neck or back",
            "No discomfort",
        ],
    ),
    choice(
        "symptom_location",
        "Where exactly do you feel the discomfort?",
        Symptoms,
        &[
            "Just below the breastbone (epigastric area)",
            "Middle of the chest (retrosternal)",
            "Upper abdomen",
            "Throat or behind the sternum",
            "Lower abdomen",
            "Difficult to localise",
        ],
    ),
    choice(
        "symptom_intensity",
        "How would you rate the intensity of your discomfort at its worst? (1 = mild, 10 = unbearable)",
        Symptoms,
        &["1–3: Mild", "4–6: Moderate", "7–8: Severe", "9–10: Disabling"],
    ),
    choice(
        "symptom_frequency",
        "How frequently do you experience these symptoms?",
        Symptoms,
        &[
            "Less than once a week",
            "1–2 times per week",
            "3–5 times per week",
            "Daily",
            "Multiple times daily",
        ],
    ),
    choice(
        "symptom_duration",
        "How long does each episode usually last?",
        Symptoms,
        &[
            "Less than 10 minutes",
            "10–30 minutes",
            "30 minutes – 1 hour",
            "Over 1 hour",
            "Continuous throughout the day",
        ],
    ),
    choice(
        "symptom_postprandial",
        "How soon after eating do symptoms begin?",
        Symptoms,
        &[
            "Immediately (<10 min)",
            "10–30 minutes",
            "30–60 minutes",
            "1–2 hours",
            "No clear relation to meals",
        ],
    ),
    choice(
        "symptom_food_triggers",
        "Do you notice worsening after certain foods or drinks?",
        Symptoms,
        &[
            "Spicy foods",
            "Fatty/fried foods",
            "Chocolate/caffeine",
            "Acidic foods (tomato, citrus)",
            "Alcohol",
            "No obvious triggers",
        ],
    ),
    choice(
        "symptom_physical_activity",
        "Does physical activity affect your symptoms?",
        Symptoms,
        &[
            "Worsens with bending over/lifting",
            "Worsens with exertion (e.g. running)",
            "No effect",
            "Improves with movement",
        ],
    ),
    choice(
        "symptom_lying_down",
        "Do you experience symptoms when lying down or sleeping?",
        Symptoms,
        &[
            "Yes, shortly after lying down",
            "Yes, I wake up at night with symptoms",
            "No, only daytime symptoms",
            "No clear relation",
        ],
    ),
    choice(
        "sleep_hours",
        "How many hours do you sleep on average per night?",
        Symptoms,
        &["<5 hours", "5–6 hours", "6–8 hours", ">8 hours"],
    ),
    choice(
        "sleep_position",
        "How do you position yourself when sleeping?",
        Symptoms,
        &["Flat on back", "On left side", "On right side", "On stomach", "Head elevated"],
    ),
    choice(
        "sour_taste",
        "Do you experience a sour or bitter taste in your mouth?",
        Symptoms,
        &[
            "Never",
            "Occasionally",
            "Often (more than 3 days/week)",
            "Daily, especially in the morning",
            "Only after certain foods",
        ],
    ),
    choice(
        "night_choking",
        "Have you ever woken up choking or coughing at night?",
        Symptoms,
        &[
            "Yes, frequently (weekly or more)",
            "Occasionally (less than once a week)",
            "Rarely (once or twice ever)",
            "Never",
        ],
    ),
    choice(
        "burping_hiccups",
        "Do you experience frequent burping or hiccups?",
        Symptoms,
        &[
            "Yes, multiple times daily",
            "Yes, after meals only",
            "Occasionally, without pattern",
            "No",
        ],
    ),
    choice(
        "relief_attempts",
        "Have you tried anything to relieve your symptoms already? If so, has it worked?",
        Symptoms,
        &[
            "Antacids (Tums, Maalox) worked",
            "Proton pump inhibitors (omeprazole) worked",
            "Sitting upright",
            "Eating bland food",
            "Nothing provides consistent relief",
            "Not tried anything",
        ],
    ),
    choice(
        "symptom_radiation",
        "Does your discomfort spread anywhere else?",
        Symptoms,
        &[
            "No, stays localised",
            "Radiates to neck or throat",
            "Radiates to back",
            "Radiates to left arm",
        ],
    ),
    choice(
        "chest_palpitations",
        "Do you experience chest tightness or palpitations during episodes?",
        Symptoms,
        &["Yes, regularly", "Occasionally", "Never"],
    ),
    choice(
        "symptom_free_period",
        "When was the last time you had no symptoms for 7 days straight without taking any medication?",
        Symptoms,
        &[
            "Within the past month",
            "1–3 months ago",
            "Over 3 months ago",
            "Can’t recall being symptom-free",
        ],
    ),
    // Cardiac Elimination Branch
    choice(
        "cardiac_exertion",
        "Is this discomfort triggered or worsened by exertion (walking, climbing stairs, etc.)?",
        Cardiac,
        &[
            "Yes, always with exertion",
            "Sometimes with exertion",
            "No correlation with activity",
            "Symptoms improve with activity",
        ],
    ),
    choice(
        "cardiac_antacid_response",
        "Does your discomfort improve with antacids or food?",
        Cardiac,
        &[
            "Yes, within 15–30 min",
            "No effect from antacids",
            "Worsens after eating",
            "Not applicable / never tried",
        ],
    ),
    multi_choice(
        "cardiac_risk_factors",
        "Do you have any of the following risk factors? (Select all that apply)",
        Cardiac,
        &[
            "Age > 50 years",
            "Current/former smoker",
            "Diabetes mellitus",
            "Hypertension",
            "High cholesterol",
            "Family history of early heart disease (<55 M, <65 F)",
            "None of the above",
        ],
    ),
    choice(
        "cardiac_workup",
        "Have you ever had a cardiac work-up (ECG, stress test, echocardiogram)?",
        Cardiac,
        &["Yes, normal within last 12 months", "Yes, but >1 year ago", "No, never", "Don’t recall"],
    ),
    choice(
        "cardiac_rest_discomfort",
        "Does the discomfort occur at rest, especially early morning or at night?",
        Cardiac,
        &[
            "Yes, especially early morning",
            "Yes, random times during rest",
            "Only during meals or lying down",
            "Only during activity",
        ],
    ),
    // Alarm Features
    choice(
        "weight_change",
        "Have you gained or lost significant weight in the past 6 months?",
        AlarmFeatures,
        &[
            "Lost >5% of my body weight",
            "Lost <5% of my body weight",
            "Gained weight intentionally (e.g. post-pregnancy, muscle gain)",
            "Gained weight unintentionally",
            "No weight loss or gain",
        ],
    ),
    choice(
        "vomiting_blood",
        "Have you vomited blood (haematemesis) or noticed black, tarry stools (melena)?",
        AlarmFeatures,
        &["Yes, vomited blood", "Yes, black tarry stools", "Both", "No"],
    ),
    choice(
        "dysphagia",
        "Do you have trouble swallowing (dysphagia)?",
        AlarmFeatures,
        &["Yes, progressively worsening", "Yes, occasional or stable", "No difficulty swallowing"],
    ),
    choice(
        "odynophagia",
        "Do you feel pain when swallowing (odynophagia)?",
        AlarmFeatures,
        &["Yes, sharp or burning pain with food/liquids", "No pain swallowing"],
    ),
    choice(
        "family_gi_cancer",
        "Do you have a known family history of upper gastrointestinal cancer?",
        AlarmFeatures,
        &[
            "Yes, in a first-degree relative (parent/sibling)",
            "Yes, but only distant relatives",
            "No family history",
        ],
    ),
    choice(
        "symptom_change",
        "Have your symptoms changed in nature or become more severe in the last 2–4 weeks?",
        AlarmFeatures,
        &["Yes, new or rapidly worsening symptoms", "Yes, but slowly and mildly", "No change"],
    ),
    choice(
        "immunocompromised",
        "Are you currently immunocompromised (HIV, chemotherapy, transplant, etc.)?",
        AlarmFeatures,
        &["Yes", "No"],
    ),
    choice(
        "anaemia",
        "Have you had iron deficiency anaemia or low haemoglobin recently?",
        AlarmFeatures,
        &["Yes, diagnosed in the last 3–6 months", "No or unknown"],
    ),
    choice(
        "persistent_nausea",
        "Do you experience persistent nausea or vomiting unrelated to meals?",
        AlarmFeatures,
        &["Yes, daily or nearly daily", "Occasional nausea with meals", "No"],
    ),
    // Lifestyle & Dietary
    choice(
        "meal_portion_size",
        "How large are your typical meal portions?",
        Lifestyle,
        &["Small", "Moderate", "Large"],
    ),
    choice(
        "meal_bedtime_interval",
        "How close to bedtime do you usually eat your last meal?",
        Lifestyle,
        &[
            "<1 hour before bed",
            "1–2 hours before bed",
            "2–3 hours before bed",
            ">3 hours before bed",
        ],
    ),
    choice(
        "breakfast_regular",
        "How often do you skip breakfast or have irregular meals?",
        Lifestyle,
        &["Frequently", "Occasionally", "Rarely or never"],
    ),
    choice(
        "caffeine_intake",
        "How often do you consume caffeinated beverages (tea, coffee, energy drinks)?",
        Lifestyle,
        &[">3 cups/day", "1–2 cups/day", "Rarely or never"],
    ),
    choice(
        "tobacco_use",
        "Do you smoke tobacco products?",
        Lifestyle,
        &["Yes, daily", "Occasionally/socially", "Former smoker (quit >6 months ago)", "Never"],
    ),
    choice(
        "alcohol_use",
        "Do you consume alcohol?",
        Lifestyle,
        &["Daily", "2–3 times/week", "Socially, <1x/week", "Never"],
    ),
    choice(
        "activity_level",
        "What is your typical physical activity level overall?",
        Lifestyle,
        &[
            "Sedentary (mostly sitting, <3 days/week of exercise)",
            "Light activity (walking, yoga, etc.)",
            "Moderate activity (gym, sports 3–4 days/week)",
            "High intensity (daily exercise, cardio/weights)",
        ],
    ),
    choice(
        "tight_clothing",
        "Do you wear tight-fitting clothing around your waist or abdomen?",
        Lifestyle,
        &["Yes, daily (e.g., belts, shapewear)", "Occasionally", "No"],
    ),
    // Medication History
    choice(
        "recent_ppi",
        "Have you taken omeprazole or any PPI in the last 3 months?",
        Medication,
        &["Yes", "No"],
    ),
    multi_choice(
        "meds_reflux",
        "Are you taking any prescription medications that can worsen or mimic reflux symptoms? (Select all that apply)",
        Medication,
        &[
            "NSAIDs (e.g. ibuprofen, naproxen, diclofenac)",
            "Bisphosphonates (e.g. alendronate, risedronate)",
            "Iron supplements or potassium chloride",
            "Calcium channel blockers (e.g. amlodipine, nifedipine)",
            "Anticholinergics or tricyclic antidepressants",
            "Benzodiazepines or opioids",
            "SSRIs (e.g. sertraline, fluoxetine)",
            "None of the above",
        ],
    ),
    choice(
        "herbal_supplements",
        "Do you use any herbal supplements for digestion or reflux?",
        Medication,
        &[
            "Yes – ginger, slippery elm, licorice, etc.",
            "Yes – unknown herbal mixtures",
            "No supplements used",
        ],
    ),
    choice(
        "hormone_therapy",
        "Are you currently on hormone therapy or birth control pills?",
        Medication,
        &[
            "Yes – oestrogen or combined contraceptives",
            "Yes – progesterone (e.g. IUD, oral, etc.)",
            "No hormonal therapy",
        ],
    ),
    choice(
        "other_supplements",
        "Do you take any supplements (e.g. calcium, magnesium, zinc)?",
        Medication,
        &["Yes, daily", "Occasionally", "No supplements"],
    ),
    // Bowel and GI History
    choice(
        "bloating_after_eating",
        "Do you feel bloated or excessively full after eating?",
        BowelHistory,
        &[
            "Yes, even with small meals (early satiety)",
            "Yes, mostly after large meals",
            "No, I don’t feel unusually full",
            "Only occasionally",
        ],
    ),
    choice(
        "bowel_regular",
        "Do you pass stool regularly (once daily or near daily)?",
        BowelHistory,
        &[
            "Yes, once daily",
            "Yes, but not daily (3–5x/week)",
            "No, <3 times per week",
            "Too frequent (>3/day)",
        ],
    ),
    choice(
        "bowel_pattern",
        "Do you ever experience constipation, diarrhoea, or alternating stool patterns?",
        BowelHistory,
        &[
            "Yes, alternating diarrhoea and constipation",
            "Mostly constipation",
            "Mostly diarrhoea",
            "No abnormal bowel patterns",
        ],
    ),
    choice(
        "ulcer_history",
        "Have you ever been diagnosed with a stomach or duodenal ulcer?",
        BowelHistory,
        &[
            "Yes, previously confirmed via endoscopy",
            "Suspected, but never confirmed",
            "No history of ulcers",
            "Not sure",
        ],
    ),
    choice(
        "h_pylori",
        "Have you ever tested positive for Helicobacter pylori (H. pylori)?",
        BowelHistory,
        &[
            "Yes, tested positive and completed eradication therapy",
            "Yes, but not treated / treatment incomplete",
            "No, tested negative",
            "Never been tested",
        ],
    ),
    choice(
        "cholecystectomy",
        "Have you ever had a cholecystectomy (gallbladder removal)?",
        BowelHistory,
        &["Yes", "No"],
    ),
    // Respiratory / ENT Manifestations
    choice(
        "postnasal_drip",
        "Have you experienced persistent throat clearing or a chronic sensation of mucus in your throat (postnasal drip)?",
        Respiratory,
        &["Yes, daily or multiple times per day", "Yes, but only occasionally", "No"],
    ),
    choice(
        "hoarseness",
        "Do you experience hoarseness or a change in your voice quality, especially in the morning?",
        Respiratory,
        &[
            "Yes, daily or several times a week",
            "Occasionally, during colds or overuse",
            "No voice issues",
        ],
    ),
    choice(
        "asthma_history",
        "Have you ever been diagnosed with asthma or reactive airway disease (RAD)?",
        Respiratory,
        &["Yes", "No"],
    ),
    choice(
        "globus_sensation",
        "Have you experienced frequent sore throats or a lump-in-the-throat sensation (globus)?",
        Respiratory,
        &[
            "Yes, sore throat and globus regularly",
            "Only globus sensation without pain",
            "No such symptoms",
        ],
    ),
    // Psychosocial & Stress Factors
    choice(
        "stress_worsen",
        "Do your symptoms worsen during times of stress, anxiety, or emotional upset?",
        Psychosocial,
        &[
            "Yes, significantly and predictably",
            "Yes, but not always",
            "No, symptoms unrelated to stress",
            "Not sure / haven’t noticed",
        ],
    ),
    // Follow-up
    choice(
        "followup_antacid_days",
        "How many days in the past week did you use antacids (Tums, Maalox, etc.)?",
        FollowUp,
        &["0–1 days", "2–3 days", "4+ days"],
    ),
    choice(
        "followup_symptom_interfere",
        "How often did your symptoms interfere with daily life or sleep?",
        FollowUp,
        &["Never", "Once or twice", "Several times"],
    ),
    choice(
        "followup_new_symptoms",
        "Have you noticed any new symptoms since starting lifestyle changes?",
        FollowUp,
        &["No", "Yes – Night symptoms", "Yes – Nausea or dysphagia"],
    ),
    choice(
        "followup_improvement",
        "Compared to before treatment, how would you rate symptom improvement?",
        FollowUp,
        &[">75% improvement", "30–75%", "<30% or worsening"],
    ),
    choice(
        "followup_antacid_freq",
        "Are you still using antacids >3x/week?",
        FollowUp,
        &["No", "Yes"],
    ),
    choice(
        "followup_adherence",
        "Have you adhered to meal timing, portion control, and sleep posture advice?",
        FollowUp,
        &["Yes", "No"],
    ),
    choice(
        "followup_symptom_free_days",
        "Over the past 2 weeks, how many symptom-free days have you had without antacids?",
        FollowUp,
        &[">10 days", "5–10 days", "<5 days"],
    ),
    choice(
        "followup_night_relief",
        "Are you currently requiring any night-time relief medication (famotidine or antacids)?",
        FollowUp,
        &["No", "Yes"],
    ),
    choice(
        "followup_alarm_features",
        "Have you experienced any weight change, vomiting, black stools, or new difficulty swallowing?",
        FollowUp,
        &["No", "Yes"],
    ),
];
