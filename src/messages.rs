//! English → Bengali display strings. Reasoning produces English only;
//! translation happens here, at the presentation edge.

use crate::models::enums::{CancerType, Locale, UrgencyLevel};
use crate::synthesizer::{CarePlan, Recommendations};

const BENGALI: &[(&str, &str)] = &[
    // Symptom names
    ("Persistent Cough", "দীর্ঘস্থায়ী কাশি"),
    ("Blood in Sputum", "কফের সাথে রক্ত"),
    ("Breast Lump", "স্তনে গাঁট"),
    ("Blood in Stool", "মলে রক্ত"),
    ("Bowel Habit Changes", "মলত্যাগের অভ্যাসে পরিবর্তন"),
    ("Unexplained Weight Loss", "অব্যাখ্যাত ওজন হ্রাস"),
    ("Persistent Fatigue", "দীর্ঘস্থায়ী ক্লান্তি"),
    ("Unusual Bleeding", "অস্বাভাবিক রক্তপাত"),
    ("Difficulty Swallowing", "গিলতে অসুবিধা"),
    ("Urinary Symptoms", "প্রস্রাবের সমস্যা"),
    ("Skin Changes", "ত্বকের পরিবর্তন"),
    // Stage 4 plan
    ("Seek immediate medical attention", "অবিলম্বে চিকিৎসা সহায়তা নিন"),
    (
        "Schedule appointment with primary care physician within 1-2 weeks",
        "১-২ সপ্তাহের মধ্যে প্রাথমিক চিকিৎসকের সাথে অ্যাপয়েন্টমেন্ট নিন",
    ),
    (
        "Continue routine health check-ups and age-appropriate screenings",
        "নিয়মিত স্বাস্থ্য পরীক্ষা ও বয়স অনুযায়ী স্ক্রিনিং চালিয়ে যান",
    ),
    ("Severe unexplained pain", "অব্যাখ্যাত তীব্র ব্যথা"),
    ("Significant bleeding", "উল্লেখযোগ্য রক্তপাত"),
    ("Difficulty breathing", "শ্বাস নিতে কষ্ট"),
    ("Loss of consciousness", "জ্ঞান হারানো"),
    (
        "Maintain a healthy diet rich in fruits and vegetables",
        "ফল ও সবজি সমৃদ্ধ স্বাস্থ্যকর খাদ্য গ্রহণ করুন",
    ),
    (
        "Exercise regularly (at least 150 minutes per week)",
        "নিয়মিত ব্যায়াম করুন (সপ্তাহে কমপক্ষে ১৫০ মিনিট)",
    ),
    ("Maintain a healthy weight", "স্বাস্থ্যকর ওজন বজায় রাখুন"),
    ("Limit alcohol consumption", "মদ্যপান সীমিত করুন"),
    ("Avoid tobacco products", "তামাকজাত পণ্য এড়িয়ে চলুন"),
    ("Protect skin from excessive sun exposure", "অতিরিক্ত রোদ থেকে ত্বক রক্ষা করুন"),
    ("Get recommended cancer screenings", "প্রস্তাবিত ক্যান্সার স্ক্রিনিং করান"),
    ("Immediate medical evaluation", "অবিলম্বে চিকিৎসা মূল্যায়ন"),
    (
        "Follow-up within 1 week after initial consultation",
        "প্রাথমিক পরামর্শের ১ সপ্তাহের মধ্যে ফলো-আপ",
    ),
    ("Medical evaluation within 1-2 weeks", "১-২ সপ্তাহের মধ্যে চিকিৎসা মূল্যায়ন"),
    ("Follow-up in 1 month", "১ মাস পর ফলো-আপ"),
    ("Regular monitoring every 3-6 months", "প্রতি ৩-৬ মাস অন্তর নিয়মিত পর্যবেক্ষণ"),
    ("Routine check-up in 3-6 months", "৩-৬ মাসের মধ্যে নিয়মিত স্বাস্থ্য পরীক্ষা"),
    ("Annual comprehensive health screening", "বার্ষিক ব্যাপক স্বাস্থ্য পরীক্ষা"),
    // Answer-driven actions
    (
        "Go to nearest hospital or contact emergency department",
        "নিকটস্থ হাসপাতালে যান বা জরুরি বিভাগে যোগাযোগ করুন",
    ),
    (
        "Prepare a list of symptoms and bring it to the healthcare provider",
        "লক্ষণগুলির একটি তালিকা তৈরি করুন এবং চিকিৎসকের সাথে নিয়ে যান",
    ),
    (
        "Schedule appointment with healthcare provider within 1-2 weeks",
        "১-২ সপ্তাহের মধ্যে চিকিৎসকের সাথে অ্যাপয়েন্টমেন্ট নিন",
    ),
    ("Monitor and record your symptoms", "লক্ষণগুলি পর্যবেক্ষণ করুন এবং রেকর্ড করুন"),
    // Screening
    ("Get mammogram screening (annually)", "ম্যামোগ্রাম করান (বার্ষিক)"),
    ("Get Pap smear test", "প্যাপ স্মিয়ার টেস্ট করান"),
    ("Get HPV testing", "HPV পরীক্ষা করান"),
    ("Get prostate screening (PSA test)", "প্রোস্টেট স্ক্রিনিং (PSA টেস্ট)"),
    (
        "Get colorectal screening (colonoscopy or FIT test)",
        "কোলোরেক্টাল স্ক্রিনিং (কোলনোস্কোপি বা FIT টেস্ট)",
    ),
    ("Get Hepatitis B and C screening", "হেপাটাইটিস বি এবং সি পরীক্ষা করান"),
    ("Mammogram screening overdue", "ম্যামোগ্রাম স্ক্রিনিং বাকি"),
    ("Pap smear screening overdue", "প্যাপ স্মিয়ার স্ক্রিনিং বাকি"),
    ("Prostate screening overdue", "প্রোস্টেট স্ক্রিনিং বাকি"),
    ("Colorectal screening overdue", "কোলোরেক্টাল স্ক্রিনিং বাকি"),
    // Lifestyle
    ("Quit smoking - this is the most important step", "ধূমপান বন্ধ করুন - এটি সবচেয়ে গুরুত্বপূর্ণ"),
    ("Seek medical help for smoking cessation", "ধূমপান বন্ধের জন্য চিকিৎসকের সাহায্য নিন"),
    ("Consider nicotine replacement therapy", "নিকোটিন রিপ্লেসমেন্ট থেরাপি বিবেচনা করুন"),
    ("Reduce or stop alcohol consumption", "মদ্যপান কমান বা বন্ধ করুন"),
    ("Consider alcohol counseling if needed", "প্রয়োজনে অ্যালকোহল কাউন্সেলিং নিন"),
    ("Adopt a healthy diet", "স্বাস্থ্যকর খাদ্যাভ্যাস গড়ে তুলুন"),
    ("Eat plenty of fruits and vegetables", "প্রচুর ফল ও সবজি খান"),
    ("Avoid processed foods", "প্রক্রিয়াজাত খাবার এড়িয়ে চলুন"),
    ("Include whole grains and lean proteins", "পুরো শস্য ও চর্বিহীন প্রোটিন খান"),
    ("Start regular exercise routine", "নিয়মিত ব্যায়াম শুরু করুন"),
    (
        "Aim for at least 150 minutes of moderate exercise per week",
        "সপ্তাহে কমপক্ষে ১৫০ মিনিট মাঝারি ব্যায়াম করুন",
    ),
    ("Start slowly and gradually increase intensity", "ধীরে ধীরে শুরু করুন এবং ক্রমশ বাড়ান"),
    ("Use sunscreen when going outdoors", "রোদে বের হওয়ার সময় সানস্ক্রিন ব্যবহার করুন"),
    ("Wear protective clothing", "সুরক্ষামূলক পোশাক পরুন"),
    ("Avoid sun exposure between 10 AM and 4 PM", "সকাল ১০টা থেকে বিকাল ৪টা পর্যন্ত রোদ এড়িয়ে চলুন"),
    // Referrals
    ("Consult breast specialist or oncologist", "স্তন বিশেষজ্ঞ বা অনকোলজিস্টের কাছে যান"),
    ("Consult urologist", "ইউরোলজিস্টের কাছে যান"),
    ("Consult pulmonologist or chest specialist", "পালমোনোলজিস্ট বা বক্ষরোগ বিশেষজ্ঞের কাছে যান"),
    ("Consult gastroenterologist", "গ্যাস্ট্রোএন্টারোলজিস্টের কাছে যান"),
    ("Consult dermatologist", "ডার্মাটোলজিস্ট বা চর্ম বিশেষজ্ঞের কাছে যান"),
    ("Consult oncologist (cancer specialist)", "অনকোলজিস্ট (ক্যান্সার বিশেষজ্ঞ) এর কাছে যান"),
    (
        "Continue regular follow-up with your oncologist",
        "আপনার অনকোলজিস্টের সাথে নিয়মিত ফলো-আপ করুন",
    ),
    // Emergency signs
    ("Severe pain that is worsening", "গুরুতর ব্যথা যা ক্রমশ বাড়ছে"),
    ("Excessive bleeding", "অতিরিক্ত রক্তপাত"),
    ("Shortness of breath or chest pressure", "শ্বাসকষ্ট বা বুকে চাপ"),
    ("Loss of consciousness or severe dizziness", "অজ্ঞান হয়ে যাওয়া বা মাথা ঘোরা"),
    ("Rapid weight loss (5+ kg per month)", "দ্রুত ওজন হ্রাস (মাসে ৫+ কেজি)"),
    ("High fever with chills", "উচ্চ জ্বর সাথে ঠান্ডা লাগা"),
    ("Difficulty swallowing or speaking", "গিলতে অসুবিধা বা কথা বলতে সমস্যা"),
    ("Rapidly growing breast lump", "স্তনে দ্রুত বাড়ছে এমন গাঁট"),
    ("Abnormally heavy menstrual bleeding", "অস্বাভাবিক ভারী মাসিক বা রক্তপাত"),
    ("Blood in urine", "প্রস্রাবে রক্ত"),
    ("Sudden testicular pain or swelling", "অণ্ডকোষে হঠাৎ ব্যথা বা ফোলা"),
    // Personalized advice
    (
        "Regular follow-up is crucial given your cancer history",
        "ক্যান্সারের ইতিহাস থাকায় নিয়মিত ফলো-আপ অত্যন্ত গুরুত্বপূর্ণ",
    ),
    ("Stay vigilant for new or changing symptoms", "নতুন বা পরিবর্তিত লক্ষণের জন্য সতর্ক থাকুন"),
    ("Maintain regular contact with your oncologist", "আপনার অনকোলজিস্টের সাথে নিয়মিত যোগাযোগ রাখুন"),
    (
        "Proper management of chronic diseases helps in cancer prevention",
        "দীর্ঘমেয়াদী রোগের সঠিক ব্যবস্থাপনা ক্যান্সার প্রতিরোধে সাহায্য করে",
    ),
    (
        "Continue regular medications and follow medical advice",
        "নিয়মিত ওষুধ সেবন ও চিকিৎসকের পরামর্শ মেনে চলুন",
    ),
    (
        "Hepatitis positive status increases liver cancer risk",
        "হেপাটাইটিস পজিটিভ হওয়ায় লিভার ক্যান্সারের ঝুঁকি বেশি",
    ),
    ("Get regular liver function tests", "নিয়মিত লিভার ফাংশন টেস্ট করান"),
    ("Avoid alcohol completely", "অ্যালকোহল এড়িয়ে চলুন"),
    (
        "HPV positive status increases cervical cancer risk",
        "HPV পজিটিভ হওয়ায় জরায়ু মুখের ক্যান্সারের ঝুঁকি বেশি",
    ),
    ("Get regular Pap smear tests", "নিয়মিত প্যাপ স্মিয়ার টেস্ট করান"),
    ("Practice safe sexual relationships", "নিরাপদ যৌন সম্পর্ক বজায় রাখুন"),
    (
        "Consider genetic counseling given family cancer history",
        "পারিবারিক ক্যান্সারের ইতিহাস থাকায় জেনেটিক কাউন্সেলিং বিবেচনা করুন",
    ),
    (
        "Consider starting screening earlier than recommended age",
        "প্রস্তাবিত বয়সের আগেই স্ক্রিনিং শুরু করার কথা ভাবুন",
    ),
    (
        "Inform your healthcare provider about occupational exposures",
        "পেশাগত এক্সপোজারের কথা আপনার চিকিৎসককে জানান",
    ),
    ("Follow workplace safety guidelines", "কর্মক্ষেত্রে নিরাপত্তা নির্দেশনা মেনে চলুন"),
    ("Get regular health monitoring", "নিয়মিত স্বাস্থ্য পর্যবেক্ষণ করুন"),
    // Care plan: preventive care
    ("Maintain a healthy diet", "স্বাস্থ্যকর খাদ্যাভ্যাস বজায় রাখুন"),
    ("Exercise regularly", "নিয়মিত ব্যায়াম করুন"),
    ("Avoid smoking and tobacco use", "ধূমপান ও তামাক সেবন এড়িয়ে চলুন"),
    ("Get age-appropriate regular screenings", "বয়স অনুযায়ী নিয়মিত স্ক্রিনিং করান"),
    ("Annual health checkups", "বার্ষিক স্বাস্থ্য পরীক্ষা করান"),
    ("Maintain adequate sleep habits", "পর্যাপ্ত ঘুমের অভ্যাস করুন"),
    ("Manage stress effectively", "মানসিক চাপ নিয়ন্ত্রণ করুন"),
    ("Regular follow-ups with healthcare provider", "নিয়মিত চিকিৎসকের সাথে ফলো-আপ করুন"),
    ("Ask your doctor about Hepatitis B vaccination", "হেপাটাইটিস বি টিকা সম্পর্কে চিকিৎসকের সাথে কথা বলুন"),
    ("Ask your doctor about HPV vaccination", "HPV টিকা সম্পর্কে চিকিৎসকের সাথে কথা বলুন"),
    ("Catch up on overdue screenings first", "প্রথমে বাকি থাকা স্ক্রিনিংগুলো করিয়ে নিন"),
    ("Perform a monthly breast self-examination", "প্রতি মাসে নিজে স্তন পরীক্ষা করুন"),
    ("Check your skin monthly for new or changing moles", "প্রতি মাসে ত্বকে নতুন বা পরিবর্তিত তিল আছে কিনা দেখুন"),
    ("Perform a monthly testicular self-examination", "প্রতি মাসে নিজে অণ্ডকোষ পরীক্ষা করুন"),
    // Care plan: risk reduction
    ("Consider genetic counseling", "জেনেটিক কাউন্সেলিং বিবেচনা করুন"),
    ("Inform healthcare providers about family history", "আপনার পারিবারিক ইতিহাস চিকিৎসকদের জানান"),
    ("Start screening earlier than recommended age", "প্রস্তাবিত বয়সের আগেই স্ক্রিনিং শুরু করুন"),
    ("Use protective equipment at workplace", "কর্মক্ষেত্রে সুরক্ষা সরঞ্জাম ব্যবহার করুন"),
    ("Get regular occupational health checkups", "নিয়মিত পেশাগত স্বাস্থ্য পরীক্ষা করান"),
    ("Be aware of workplace hazardous substances", "কর্মক্ষেত্রের বিপজ্জনক পদার্থ সম্পর্কে সচেতন থাকুন"),
    (
        "Report new or persistent symptoms to your doctor promptly",
        "নতুন বা দীর্ঘস্থায়ী লক্ষণ দ্রুত চিকিৎসককে জানান",
    ),
    (
        "Complete the recommended diagnostic tests without delay",
        "প্রস্তাবিত রোগনির্ণয় পরীক্ষাগুলো দেরি না করে করান",
    ),
    (
        "Get a liver ultrasound and AFP blood test every 6 months",
        "প্রতি ৬ মাসে লিভার আল্ট্রাসাউন্ড ও AFP রক্ত পরীক্ষা করান",
    ),
    ("Get Pap smear and HPV co-testing on schedule", "নির্ধারিত সময়ে প্যাপ স্মিয়ার ও HPV পরীক্ষা করান"),
    ("Follow your survivorship care plan", "আপনার ক্যান্সার-পরবর্তী যত্ন পরিকল্পনা মেনে চলুন"),
    ("Attend every scheduled surveillance visit", "প্রতিটি নির্ধারিত পর্যবেক্ষণ সাক্ষাতে উপস্থিত থাকুন"),
    ("Report possible recurrence symptoms early", "ক্যান্সার ফিরে আসার সম্ভাব্য লক্ষণ দ্রুত জানান"),
    (
        "Keep chronic conditions under regular medical control",
        "দীর্ঘমেয়াদী রোগ নিয়মিত চিকিৎসার মাধ্যমে নিয়ন্ত্রণে রাখুন",
    ),
    // Care plan: nutrition
    (
        "Colorful fruits and vegetables (especially dark greens and orange)",
        "রঙিন ফল ও সবজি (বিশেষত গাঢ় সবুজ ও কমলা রঙের)",
    ),
    ("Whole grains (brown rice, oats, quinoa)", "পূর্ণ শস্য জাতীয় খাবার (বাদামী চাল, ওটস)"),
    ("Lean proteins (fish, poultry, legumes)", "চর্বিহীন প্রোটিন (মাছ, মুরগি, ডাল)"),
    ("Nuts and seeds", "বাদাম ও বীজ জাতীয় খাবার"),
    ("Olive oil and other healthy fats", "জলপাই তেল ও অন্যান্য স্বাস্থ্যকর চর্বি"),
    ("Processed meats (sausages, ham, bacon)", "প্রক্রিয়াজাত মাংস (সসেজ, হ্যাম)"),
    ("Excessive sugary foods and drinks", "অতিরিক্ত চিনিযুক্ত খাবার ও পানীয়"),
    ("Trans fat containing foods", "ট্রান্স ফ্যাট যুক্ত খাবার"),
    ("High sodium foods", "অতিরিক্ত লবণযুক্ত খাবার"),
    ("Fried and fatty foods", "ভাজা ও তৈলাক্ত খাবার"),
    (
        "Prefer nutrients from food over high-dose supplements",
        "উচ্চ মাত্রার সাপ্লিমেন্টের বদলে খাবার থেকে পুষ্টি নিন",
    ),
    (
        "Ask your doctor whether a daily multivitamin is appropriate",
        "প্রতিদিন মাল্টিভিটামিন প্রয়োজন কিনা চিকিৎসককে জিজ্ঞাসা করুন",
    ),
    (
        "Check with your doctor before taking herbal supplements",
        "ভেষজ সাপ্লিমেন্ট নেওয়ার আগে চিকিৎসকের পরামর্শ নিন",
    ),
    ("Fill half your plate with vegetables and fruits", "প্লেটের অর্ধেক সবজি ও ফল দিয়ে পূর্ণ করুন"),
    ("Plan weekly meals to limit processed food", "প্রক্রিয়াজাত খাবার কমাতে সাপ্তাহিক খাবারের পরিকল্পনা করুন"),
    ("Cook at home more often", "বেশি বেশি বাড়িতে রান্না করুন"),
    (
        "Replace alcoholic drinks with water or unsweetened drinks",
        "মদের বদলে পানি বা চিনিমুক্ত পানীয় পান করুন",
    ),
    // Care plan: exercise
    ("Start with 15-20 minutes of walking daily", "দিনে ১৫-২০ মিনিট হাঁটা দিয়ে শুরু করুন"),
    ("Gradually increase to 30 minutes", "ধীরে ধীরে ৩০ মিনিটে বাড়ান"),
    ("Aim for 3-4 days of cardio per week", "সপ্তাহে ৩-৪ দিন কার্ডিও ব্যায়াম করুন"),
    ("Light weight training 2 days per week", "সপ্তাহে ২ দিন হালকা ওজন তোলার ব্যায়াম"),
    ("Bodyweight exercises (push-ups, squats)", "বডিওয়েট এক্সারসাইজ (পুশ আপ, স্কোয়াট)"),
    ("Gradually increase intensity", "ধীরে ধীরে তীব্রতা বাড়ান"),
    ("Add one or two more sessions each week", "প্রতি সপ্তাহে আরও এক বা দুটি সেশন যোগ করুন"),
    ("150 minutes of moderate-intensity exercise per week", "সপ্তাহে ১৫০ মিনিট মাঝারি তীব্রতার ব্যায়াম"),
    ("Add running, cycling, or swimming", "দৌড়, সাইক্লিং বা সাঁতার যোগ করুন"),
    ("High-intensity intervals 2-3 times per week", "উচ্চ তীব্রতার ব্যায়াম সপ্তাহে ২-৩ দিন"),
    ("Include strength training exercises 2 days per week", "শক্তি বৃদ্ধির ব্যায়াম সপ্তাহে ২ দিন করুন"),
    ("Stretch major muscle groups after each session", "প্রতিটি সেশনের পরে প্রধান পেশিগুলো স্ট্রেচ করুন"),
    ("Add balance exercises to prevent falls", "পড়ে যাওয়া রোধে ভারসাম্যের ব্যায়াম যোগ করুন"),
    (
        "Prefer low-impact activities such as walking or swimming",
        "হাঁটা বা সাঁতারের মতো কম চাপের ব্যায়াম বেছে নিন",
    ),
    // Care plan: stress management
    (
        "Practice 10-15 minutes of meditation or deep breathing daily",
        "প্রতিদিন ১০-১৫ মিনিট ধ্যান বা গভীর শ্বাস নেওয়ার অভ্যাস করুন",
    ),
    ("Ensure adequate sleep (7-8 hours)", "পর্যাপ্ত ঘুম নিশ্চিত করুন (৭-৮ ঘন্টা)"),
    ("Spend quality time with family and friends", "পরিবার ও বন্ধুদের সাথে সময় কাটান"),
    ("Engage in hobbies and recreational activities", "শখের কাজে সময় দিন"),
    ("Consider professional counseling if needed", "প্রয়োজনে পেশাদার কাউন্সেলিং নিন"),
    ("Spend time in nature regularly", "নিয়মিত প্রকৃতিতে সময় কাটান"),
    ("Keep a journal for emotional expression", "জার্নাল লেখার অভ্যাস করুন"),
    // Care plan: follow-up
    ("Get a medical evaluation today", "আজই চিকিৎসা মূল্যায়ন করান"),
    ("See a doctor within 24-48 hours", "২৪-৪৮ ঘন্টার মধ্যে চিকিৎসক দেখান"),
    ("Prepare a list of symptoms", "লক্ষণের তালিকা প্রস্তুত রাখুন"),
    ("Know nearest emergency hospital location", "জরুরি হাসপাতালের ঠিকানা জেনে রাখুন"),
    ("See a doctor within 1-2 weeks", "১-২ সপ্তাহের মধ্যে চিকিৎসক দেখান"),
    ("Monthly follow-ups", "মাসিক ফলো-আপ করুন"),
    ("Monitor symptom changes", "লক্ষণের পরিবর্তন পর্যবেক্ষণ করুন"),
    ("Annual comprehensive health checkup", "বার্ষিক ব্যাপক স্বাস্থ্য পরীক্ষা করান"),
    ("Regular cancer screenings", "নিয়মিত ক্যান্সার স্ক্রিনিং"),
    ("Monitor lifestyle improvements", "জীবনযাত্রার উন্নতি পর্যবেক্ষণ"),
];

/// Bengali rendering of a known English string; unknown strings pass through.
pub fn translate(text: &str, locale: Locale) -> &str {
    match locale {
        Locale::English => text,
        Locale::Bengali => BENGALI
            .iter()
            .find(|(en, _)| *en == text)
            .map(|(_, bn)| *bn)
            .unwrap_or(text),
    }
}

pub fn translate_all(items: &[String], locale: Locale) -> Vec<String> {
    items.iter().map(|s| translate(s, locale).to_string()).collect()
}

pub fn localize_recommendations(recs: &Recommendations, locale: Locale) -> Recommendations {
    if locale == Locale::English {
        return recs.clone();
    }
    Recommendations {
        immediate_actions: translate_all(&recs.immediate_actions, locale),
        diagnostic_tests: translate_all(&recs.diagnostic_tests, locale),
        screening_recommendations: translate_all(&recs.screening_recommendations, locale),
        lifestyle_modifications: translate_all(&recs.lifestyle_modifications, locale),
        follow_up_schedule: translate_all(&recs.follow_up_schedule, locale),
        specialist_referrals: translate_all(&recs.specialist_referrals, locale),
        emergency_signs: translate_all(&recs.emergency_signs, locale),
        personalized_advice: translate_all(&recs.personalized_advice, locale),
    }
}

pub fn localize_care_plan(plan: &CarePlan, locale: Locale) -> CarePlan {
    if locale == Locale::English {
        return plan.clone();
    }
    plan.map_items(|s| translate(s, locale).to_string())
}

pub fn urgency_label(level: UrgencyLevel, locale: Locale) -> &'static str {
    match (locale, level) {
        (Locale::English, UrgencyLevel::Low) => "Low",
        (Locale::English, UrgencyLevel::Moderate) => "Moderate",
        (Locale::English, UrgencyLevel::High) => "High",
        (Locale::English, UrgencyLevel::Critical) => "Critical",
        (Locale::Bengali, UrgencyLevel::Low) => "কম",
        (Locale::Bengali, UrgencyLevel::Moderate) => "মাঝারি",
        (Locale::Bengali, UrgencyLevel::High) => "উচ্চ",
        (Locale::Bengali, UrgencyLevel::Critical) => "জরুরি",
    }
}

pub fn cancer_label(cancer: CancerType, locale: Locale) -> &'static str {
    match locale {
        Locale::English => cancer.label(),
        Locale::Bengali => match cancer {
            CancerType::Breast => "স্তন ক্যান্সার",
            CancerType::Lung => "ফুসফুস ক্যান্সার",
            CancerType::Colorectal => "কোলোরেক্টাল ক্যান্সার",
            CancerType::Prostate => "প্রোস্টেট ক্যান্সার",
            CancerType::Cervical => "জরায়ু মুখের ক্যান্সার",
            CancerType::Liver => "লিভার ক্যান্সার",
            CancerType::Stomach => "পাকস্থলীর ক্যান্সার",
            CancerType::Skin => "ত্বকের ক্যান্সার",
            CancerType::Blood => "রক্তের ক্যান্সার",
            CancerType::Unknown => "অজানা",
        },
    }
}
